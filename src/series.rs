use eframe::egui::Color32;

use crate::color;
use crate::data::model::{ColumnError, Table};

pub const X_LABEL: &str = "q";
pub const Y_LABEL: &str = "err";

/// Column holding the shared x values.
const X_COLUMN: usize = 0;

/// (column, colour) of each plotted series, in drawing order.
const SERIES_COLUMNS: [(usize, Color32); 2] = [(1, color::SERIES_A), (2, color::SERIES_B)];

// ---------------------------------------------------------------------------
// Series – one connected line
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: Color32,
    /// `[x, y]` pairs in file order.
    pub points: Vec<[f64; 2]>,
}

// ---------------------------------------------------------------------------
// PlotData – everything the window draws, computed up front
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series: Vec<Series>,
}

impl PlotData {
    /// Pair column 1 and column 2 with column 0.
    ///
    /// Fails if any of the three columns is missing, including for a table
    /// with no rows (which has no columns either).
    pub fn from_table(table: &Table) -> Result<Self, ColumnError> {
        let x = table.column(X_COLUMN)?;

        let series = SERIES_COLUMNS
            .iter()
            .map(|&(col, color)| -> Result<Series, ColumnError> {
                let y = table.column(col)?;
                let points: Vec<[f64; 2]> =
                    x.iter().zip(&y).map(|(&xi, &yi)| [xi, yi]).collect();
                log::debug!("Series from column {col}: {} point(s)", points.len());
                Ok(Series {
                    name: format!("column {col}"),
                    color,
                    points,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PlotData {
            x_label: X_LABEL,
            y_label: Y_LABEL,
            series,
        })
    }

    /// Number of x positions shared by every series.
    pub fn n_points(&self) -> usize {
        self.series.first().map_or(0, |s| s.points.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_table;

    fn table(text: &str) -> Table {
        parse_table(text.as_bytes()).unwrap()
    }

    #[test]
    fn two_series_against_column_zero() {
        let data = PlotData::from_table(&table("0 1.0 2.0\n1 1.5 2.5\n2 2.0 3.0\n")).unwrap();

        assert_eq!(data.x_label, "q");
        assert_eq!(data.y_label, "err");
        assert_eq!(data.series.len(), 2);
        assert_eq!(data.n_points(), 3);

        let a = &data.series[0];
        assert_eq!(a.points, vec![[0.0, 1.0], [1.0, 1.5], [2.0, 2.0]]);
        assert_eq!(a.color, color::SERIES_A);

        let b = &data.series[1];
        assert_eq!(b.points, vec![[0.0, 2.0], [1.0, 2.5], [2.0, 3.0]]);
        assert_eq!(b.color, color::SERIES_B);
    }

    #[test]
    fn columns_past_two_are_ignored() {
        let data = PlotData::from_table(&table("0 1 2 99\n1 2 3 99\n")).unwrap();
        assert_eq!(data.series.len(), 2);
        assert!(data.series.iter().all(|s| s.points.iter().all(|p| p[1] != 99.0)));
    }

    #[test]
    fn two_columns_is_an_index_error() {
        let err = PlotData::from_table(&table("0 1\n1 2\n")).unwrap_err();
        assert_eq!(
            err,
            ColumnError::OutOfRange {
                index: 2,
                columns: 2
            }
        );
    }

    #[test]
    fn one_column_fails_on_first_series() {
        let err = PlotData::from_table(&table("0\n1\n")).unwrap_err();
        assert_eq!(
            err,
            ColumnError::OutOfRange {
                index: 1,
                columns: 1
            }
        );
    }

    #[test]
    fn empty_table_is_an_index_error() {
        let err = PlotData::from_table(&table("")).unwrap_err();
        assert_eq!(
            err,
            ColumnError::OutOfRange {
                index: 0,
                columns: 0
            }
        );
    }

    #[test]
    fn rebuilding_gives_identical_series() {
        let t = table("0 0.1 0.2\n0.5 0.3 0.1\n1 0.1 0.0\n");
        assert_eq!(
            PlotData::from_table(&t).unwrap(),
            PlotData::from_table(&t).unwrap()
        );
    }
}
