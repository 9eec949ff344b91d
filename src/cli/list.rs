//! List command implementation

use std::process::ExitCode;

use crate::algorithms::Algorithm;

use super::EXIT_SUCCESS;

/// Render the algorithm table printed by `pxscale list`.
pub(crate) fn algorithm_table() -> String {
    let width = Algorithm::ALL.iter().map(|a| a.name().len()).max().unwrap_or(0).max("ALGORITHM".len());

    let mut lines = vec![format!("{:<width$}  FACTOR  PAD", "ALGORITHM", width = width)];
    for algorithm in Algorithm::ALL {
        lines.push(format!(
            "{:<width$}  {:>6}  {:>3}",
            algorithm.name(),
            algorithm.factor(),
            algorithm.padding(),
            width = width
        ));
    }
    lines.push(String::new());
    lines.push("scale3xPad is accepted as an alias for scale3x.".to_string());
    lines.join("\n")
}

/// Execute the list command
pub fn run_list() -> ExitCode {
    println!("{}", algorithm_table());
    ExitCode::from(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_algorithm() {
        let table = algorithm_table();
        for algorithm in Algorithm::ALL {
            assert!(table.contains(algorithm.name()), "missing {}", algorithm);
        }
    }

    #[test]
    fn test_table_row_format() {
        let table = algorithm_table();
        let row = table.lines().find(|l| l.starts_with("scale2xSFX")).unwrap();
        let fields: Vec<&str> = row.split_whitespace().collect();
        assert_eq!(fields, vec!["scale2xSFX", "2", "2"]);
    }
}
