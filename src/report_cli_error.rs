// SPDX-License-Identifier: Apache-2.0

use colored::Colorize;

pub fn format_cli_error(message: &str, subcommand: Option<&str>) -> String {
    let subcommand_str = if let Some(subcommand) = subcommand {
        format!("{}: ", subcommand)
    } else {
        String::new()
    };
    format!("recip-lut: {}{}", subcommand_str, message.red().bold())
}

pub fn report_cli_error_and_exit(
    message: &str,
    subcommand: Option<&str>,
    details: Vec<(&str, &str)>,
) -> ! {
    eprintln!("{}", format_cli_error(message, subcommand));
    for (key, value) in details {
        eprintln!("  {}: {}", key, value);
    }
    std::process::exit(1);
}
