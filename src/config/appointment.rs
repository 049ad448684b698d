// src/config/appointment.rs
use serde::{Serialize, Deserialize};
use chrono::{NaiveDate, NaiveTime};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: u32,
    pub doctor: String,
    pub specialty: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub kind: String,
}

impl Appointment {
    /// "Dec 22 at 10:00 AM"
    pub fn schedule_label(&self) -> String {
        format!(
            "{} at {}",
            self.date.format("%b %-d"),
            self.time.format("%-I:%M %p")
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub title: String,
    pub date: NaiveDate,
}

impl Record {
    /// "Lab Results - Nov 2024"
    pub fn label(&self) -> String {
        format!("{} - {}", self.title, self.date.format("%b %Y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_label() {
        let appointment = Appointment {
            id: 2,
            doctor: "Dr. Michael Park".to_string(),
            specialty: "Cardiology".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            kind: "Follow-up".to_string(),
        };
        assert_eq!(appointment.schedule_label(), "Jan 5 at 2:30 PM");
    }

    #[test]
    fn test_record_label() {
        let record = Record {
            title: "Lab Results".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
        };
        assert_eq!(record.label(), "Lab Results - Nov 2024");
    }
}
