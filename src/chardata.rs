//! Loading and normalization of PA characterization measurements.
use crate::fitting::curve_fit::API_MAX_POWER;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CharDataError {
    /// Unable to read the characterization file
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Characterization data is malformed
    #[error("{0}")]
    Parse(String),
}

/// One characterization sweep: the tested power-level settings, the averaged
/// output power measured at each, and the maximum average observed before any
/// ceiling shift.
#[derive(Clone, Debug, PartialEq)]
pub struct CharData {
    pub power_levels: Vec<f64>,
    pub output_powers: Vec<f64>,
    pub max_power: f64,
}

impl CharData {
    /// Parses comma-delimited measurement rows: column 0 is the power-level
    /// setting, the remaining columns are repeated dBm samples for that
    /// setting. Blank lines and `#` comments are skipped.
    ///
    /// Samples are averaged per row. If the maximum average exceeds
    /// [`API_MAX_POWER`], every average is shifted down by the excess so the
    /// top of the data sits at the ceiling.
    ///
    /// # Errors
    /// Will return `Err` on unreadable input, a non-numeric field, a row with
    /// no measurement samples, or a table with no measurement rows.
    pub fn from_reader(reader: impl BufRead) -> Result<CharData, CharDataError> {
        let mut power_levels = vec![];
        let mut output_powers = vec![];
        let mut max_power: Option<f64> = None;

        for (num, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields = line
                .split(',')
                .map(|field| {
                    field.trim().parse::<f64>().map_err(|_| {
                        CharDataError::Parse(format!(
                            "Unable to read value {:?} on line {}",
                            field.trim(),
                            num + 1
                        ))
                    })
                })
                .collect::<Result<Vec<f64>, CharDataError>>()?;

            let level = fields[0];
            let samples = &fields[1..];
            if samples.is_empty() {
                Err(CharDataError::Parse(format!(
                    "No measurement samples for power level {} on line {}",
                    level,
                    num + 1
                )))?;
            }
            let avg_power = samples.iter().sum::<f64>() / samples.len() as f64;
            power_levels.push(level);
            output_powers.push(avg_power);
            if max_power.map_or(true, |max| avg_power > max) {
                max_power = Some(avg_power);
            }
        }

        let max_power = max_power.ok_or_else(|| {
            CharDataError::Parse("No measurement rows in characterization data".to_string())
        })?;
        if max_power > API_MAX_POWER {
            for output in &mut output_powers {
                *output -= max_power - API_MAX_POWER;
            }
        }
        Ok(CharData {
            power_levels,
            output_powers,
            max_power,
        })
    }
}

/// Reads a characterization csv file into a [`CharData`].
///
/// # Errors
/// Will return `Err` if the file cannot be opened or does not hold a
/// well-formed measurement table.
pub fn read_char_data<P: AsRef<Path>>(path: P) -> Result<CharData, CharDataError> {
    let file = File::open(path)?;
    CharData::from_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn averages_equal_samples_to_their_value() {
        let data = CharData::from_reader(Cursor::new("100,12.5,12.5,12.5\n96,10,10\n")).unwrap();
        assert_eq!(data.power_levels, vec![100.0, 96.0]);
        assert_eq!(data.output_powers, vec![12.5, 10.0]);
        assert_eq!(data.max_power, 12.5);
    }

    #[test]
    fn averages_mixed_samples() {
        let data = CharData::from_reader(Cursor::new("10,1.0,2.0,3.0\n")).unwrap();
        assert_eq!(data.output_powers, vec![2.0]);
    }

    #[test]
    fn shifts_everything_down_to_the_ceiling() {
        let data = CharData::from_reader(Cursor::new("240,22.0,22.0\n200,18.0,18.0\n")).unwrap();
        assert_eq!(data.max_power, 22.0);
        assert_eq!(data.output_powers, vec![20.0, 16.0]);
    }

    #[test]
    fn leaves_in_range_data_unshifted() {
        let data = CharData::from_reader(Cursor::new("240,19.5\n200,15.0\n")).unwrap();
        assert_eq!(data.output_powers, vec![19.5, 15.0]);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let data =
            CharData::from_reader(Cursor::new("# level, samples\n\n100, 20.0\n")).unwrap();
        assert_eq!(data.power_levels, vec![100.0]);
        assert_eq!(data.output_powers, vec![20.0]);
    }

    #[test]
    fn rejects_non_numeric_fields() {
        let result = CharData::from_reader(Cursor::new("100,garbage\n"));
        assert!(matches!(result, Err(CharDataError::Parse(_))));
    }

    #[test]
    fn rejects_rows_without_samples() {
        let result = CharData::from_reader(Cursor::new("100\n"));
        assert!(matches!(result, Err(CharDataError::Parse(_))));
    }

    #[test]
    fn rejects_an_empty_table() {
        let result = CharData::from_reader(Cursor::new("# nothing here\n"));
        assert!(matches!(result, Err(CharDataError::Parse(_))));
    }
}
