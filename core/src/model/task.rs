use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Priority code of a task. Serialized as the single-letter code so the
/// task file stays readable and hand-editable.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    #[serde(rename = "C")]
    Critical,
    #[serde(rename = "H")]
    High,
    #[serde(rename = "N")]
    Normal,
    #[serde(rename = "L")]
    Low,
}

impl Priority {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'C' => Some(Priority::Critical),
            'H' => Some(Priority::High),
            'N' => Some(Priority::Normal),
            'L' => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Priority::Critical => 'C',
            Priority::High => 'H',
            Priority::Normal => 'N',
            Priority::Low => 'L',
        }
    }
}

/// How a task's due date relates to the current date. Derived at render
/// time, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Upcoming,
    Today,
    Overdue,
}

impl Urgency {
    pub fn classify(due: NaiveDate, today: NaiveDate) -> Self {
        match due.cmp(&today) {
            std::cmp::Ordering::Greater => Urgency::Upcoming,
            std::cmp::Ordering::Equal => Urgency::Today,
            std::cmp::Ordering::Less => Urgency::Overdue,
        }
    }

    pub fn code(self) -> char {
        match self {
            Urgency::Upcoming => 'I',
            Urgency::Today => 'T',
            Urgency::Overdue => 'O',
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    // Body lines in entry order; never empty once committed to the store.
    pub text: Vec<String>,
    pub priority: Priority,
    pub date: NaiveDate,
    #[serde(with = "time_format")]
    pub time: NaiveTime,
}

impl Task {
    pub fn new(text: Vec<String>, priority: Priority, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            text,
            priority,
            date,
            time,
        }
    }

    pub fn urgency(&self, today: NaiveDate) -> Urgency {
        Urgency::classify(self.date, today)
    }
}

// chrono's default NaiveTime form carries seconds; the task file stores HH:MM.
mod time_format {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
