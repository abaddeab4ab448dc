use caserun_core::{CaseSet, HarnessCommand};

pub fn print_command_breakdown(command: &HarnessCommand, cases: &CaseSet) {
    println!("   🔧 Command breakdown:");
    println!("      • program: {}", command.program);

    let fixed = command.args.len().saturating_sub(cases.len());
    if fixed > 0 {
        println!("      • args: {}", command.args[..fixed].join(" "));
    }

    if cases.is_empty() {
        println!("      • cases: (none)");
    } else {
        println!("      • cases ({}):", cases.len());
        for (i, case) in cases.iter().enumerate() {
            println!("         {}. {}", i + 1, case);
        }
    }

    if let Some(dir) = command.working_dir() {
        println!("      • working directory: {}", dir.display());
    }

    if !command.env.is_empty() {
        println!("      • env:");
        for (key, value) in &command.env {
            println!("         {}={}", key, value);
        }
    }
}
