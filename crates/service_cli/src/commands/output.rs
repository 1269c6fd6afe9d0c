//! CSV rendering shared by the sampling commands.

use ndarray::{ArrayView1, ArrayView2};
use std::io::Write;

use crate::Result;

pub(crate) fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{:.*}", digits, value),
        None => value.to_string(),
    }
}

/// Write `xx` (and `yy` as a trailing column, if given) as CSV with a header row.
pub(crate) fn write_csv<W: Write>(
    out: W,
    headers: &[String],
    xx: ArrayView2<'_, f64>,
    yy: Option<ArrayView1<'_, f64>>,
    precision: Option<usize>,
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(headers)?;

    for (i, row) in xx.rows().into_iter().enumerate() {
        let mut record: Vec<String> = row.iter().map(|&x| format_value(x, precision)).collect();
        if let Some(yy) = &yy {
            record.push(format_value(yy[i], precision));
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.125, None), "0.125");
        assert_eq!(format_value(0.125, Some(2)), "0.12");
        assert_eq!(format_value(f64::NAN, None), "NaN");
    }

    #[test]
    fn test_write_csv_with_output_column() {
        let mut buffer = Vec::new();
        let headers = vec!["X1".to_string(), "X2".to_string(), "Y".to_string()];
        let xx = array![[1.0, 2.0], [3.0, 4.5]];
        let yy = array![3.0, 7.5];
        write_csv(&mut buffer, &headers, xx.view(), Some(yy.view()), None).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "X1,X2,Y\n1,2,3\n3,4.5,7.5\n");
    }
}
