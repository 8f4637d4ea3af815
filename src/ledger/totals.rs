use crate::model::OrderLine;

/// Grand total of an order: the sum of its line totals. Empty orders total 0.
pub fn total(lines: &[OrderLine]) -> f64 {
    lines.iter().map(|line| line.total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_total_is_zero() {
        assert_eq!(total(&[]), 0.0);
    }

    #[test]
    fn test_total_sums_line_totals() {
        let lines = vec![
            OrderLine::new("Tea", 2, 1.5),
            OrderLine::new("Coffee", 3, 4.0),
            OrderLine::new("Water", 1, 0.0),
        ];
        let expected: f64 = lines.iter().map(|l| l.total).sum();
        assert_eq!(total(&lines), expected);
        assert_eq!(total(&lines), 15.0);
    }
}
