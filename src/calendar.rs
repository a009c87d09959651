use crate::error::{Result, WorkbrandError};
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FiscalQuarter {
    pub quarter: u32,
    /// Calendar year in which the fiscal year began.
    pub year: i32,
}

impl fmt::Display for FiscalQuarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{} {}", self.quarter, self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuarterSlot {
    pub start: NaiveDate,
    pub quarter: FiscalQuarter,
    pub label: String,
}

fn check_start_month(start_month: u32) -> Result<()> {
    if (1..=12).contains(&start_month) {
        Ok(())
    } else {
        Err(WorkbrandError::InvalidInput(format!(
            "fiscal year start month must be 1-12, got {start_month}"
        )))
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| WorkbrandError::InvalidInput(format!("no such month: {year}-{month:02}")))
}

fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| WorkbrandError::InvalidInput(format!("date out of range: {date} + {months} months")))
}

pub fn fiscal_year_start(date: NaiveDate, start_month: u32) -> Result<NaiveDate> {
    check_start_month(start_month)?;
    let year = if date.month() < start_month {
        date.year() - 1
    } else {
        date.year()
    };
    first_of_month(year, start_month)
}

pub fn fiscal_quarter(date: NaiveDate, start_month: u32) -> Result<FiscalQuarter> {
    let fy_start = fiscal_year_start(date, start_month)?;
    let month_diff = (date.year() - fy_start.year()) * 12 + date.month() as i32
        - fy_start.month() as i32;
    Ok(FiscalQuarter {
        quarter: (month_diff / 3) as u32 + 1,
        year: fy_start.year(),
    })
}

/// `count` consecutive quarters beginning with the one containing `today`.
pub fn upcoming_quarters(today: NaiveDate, start_month: u32, count: usize) -> Result<Vec<QuarterSlot>> {
    let fy_start = fiscal_year_start(today, start_month)?;
    let offset = (today.month() + 12 - fy_start.month()) % 12 / 3 * 3;
    let current = add_months(fy_start, offset)?;

    (0..count)
        .map(|i| {
            let start = add_months(current, i as u32 * 3)?;
            let quarter = fiscal_quarter(start, start_month)?;
            Ok(QuarterSlot {
                start,
                quarter,
                label: quarter.to_string(),
            })
        })
        .collect()
}

pub fn quarter_months(start: NaiveDate) -> Result<[NaiveDate; 3]> {
    let first = first_of_month(start.year(), start.month())?;
    Ok([first, add_months(first, 1)?, add_months(first, 2)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn fiscal_year_rolls_back_before_start_month() {
        assert_eq!(fiscal_year_start(date(2026, 2, 10), 4).expect("ok"), date(2025, 4, 1));
        assert_eq!(fiscal_year_start(date(2026, 4, 1), 4).expect("ok"), date(2026, 4, 1));
        assert_eq!(fiscal_year_start(date(2026, 12, 31), 1).expect("ok"), date(2026, 1, 1));
    }

    #[test]
    fn quarter_boundaries_follow_start_month() {
        let q = |d, start| fiscal_quarter(d, start).expect("valid quarter");
        assert_eq!(q(date(2026, 3, 31), 1), FiscalQuarter { quarter: 1, year: 2026 });
        assert_eq!(q(date(2026, 4, 1), 1), FiscalQuarter { quarter: 2, year: 2026 });
        assert_eq!(q(date(2026, 7, 15), 7), FiscalQuarter { quarter: 1, year: 2026 });
        assert_eq!(q(date(2026, 6, 30), 7), FiscalQuarter { quarter: 4, year: 2025 });
    }

    #[test]
    fn upcoming_quarters_start_at_current_quarter() {
        let slots = upcoming_quarters(date(2026, 10, 19), 1, 6).expect("quarters");
        let labels = slots.iter().map(|slot| slot.label.as_str()).collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec!["Q4 2026", "Q1 2027", "Q2 2027", "Q3 2027", "Q4 2027", "Q1 2028"]
        );
        assert_eq!(slots[0].start, date(2026, 10, 1));
    }

    #[test]
    fn upcoming_quarters_with_april_fiscal_year() {
        let slots = upcoming_quarters(date(2026, 2, 10), 4, 2).expect("quarters");
        assert_eq!(slots[0].start, date(2026, 1, 1));
        assert_eq!(slots[0].label, "Q4 2025");
        assert_eq!(slots[1].label, "Q1 2026");
    }

    #[test]
    fn quarter_months_are_consecutive_firsts() {
        assert_eq!(
            quarter_months(date(2026, 11, 20)).expect("months"),
            [date(2026, 11, 1), date(2026, 12, 1), date(2027, 1, 1)]
        );
    }

    #[test]
    fn out_of_range_start_month_is_rejected() {
        for month in [0, 13] {
            assert!(matches!(
                fiscal_quarter(date(2026, 1, 1), month),
                Err(WorkbrandError::InvalidInput(_))
            ));
        }
    }
}
