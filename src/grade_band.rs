use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse reading level derived from a rounded Coleman-Liau grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeBand {
    #[serde(rename = "Before Grade 1")]
    BeforeGradeOne,
    Elementary,
    #[serde(rename = "Middle/High school")]
    MiddleHighSchool,
    College,
    University,
    #[serde(rename = "Postgraduate / Professional")]
    PostgraduateProfessional,
    Expert,
}

impl GradeBand {
    pub const ALL: [GradeBand; 7] = [
        GradeBand::BeforeGradeOne,
        GradeBand::Elementary,
        GradeBand::MiddleHighSchool,
        GradeBand::College,
        GradeBand::University,
        GradeBand::PostgraduateProfessional,
        GradeBand::Expert,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GradeBand::BeforeGradeOne => "Before Grade 1",
            GradeBand::Elementary => "Elementary",
            GradeBand::MiddleHighSchool => "Middle/High school",
            GradeBand::College => "College",
            GradeBand::University => "University",
            GradeBand::PostgraduateProfessional => "Postgraduate / Professional",
            GradeBand::Expert => "Expert",
        }
    }

    /// Whether `grade` falls inside this band's range.
    pub fn contains(&self, grade: i64) -> bool {
        match self {
            GradeBand::BeforeGradeOne => grade < 1,
            GradeBand::Elementary => (1..=3).contains(&grade),
            GradeBand::MiddleHighSchool => (4..=6).contains(&grade),
            GradeBand::College => (7..=9).contains(&grade),
            GradeBand::University => (10..=12).contains(&grade),
            GradeBand::PostgraduateProfessional => (13..=16).contains(&grade),
            GradeBand::Expert => grade > 16,
        }
    }
}

impl fmt::Display for GradeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map any integer grade to exactly one band.
pub fn classify_grade(grade: i64) -> GradeBand {
    match grade {
        i64::MIN..=0 => GradeBand::BeforeGradeOne,
        1..=3 => GradeBand::Elementary,
        4..=6 => GradeBand::MiddleHighSchool,
        7..=9 => GradeBand::College,
        10..=12 => GradeBand::University,
        13..=16 => GradeBand::PostgraduateProfessional,
        _ => GradeBand::Expert,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify_grade(0), GradeBand::BeforeGradeOne);
        assert_eq!(classify_grade(1), GradeBand::Elementary);
        assert_eq!(classify_grade(3), GradeBand::Elementary);
        assert_eq!(classify_grade(4), GradeBand::MiddleHighSchool);
        assert_eq!(classify_grade(6), GradeBand::MiddleHighSchool);
        assert_eq!(classify_grade(7), GradeBand::College);
        assert_eq!(classify_grade(9), GradeBand::College);
        assert_eq!(classify_grade(10), GradeBand::University);
        assert_eq!(classify_grade(12), GradeBand::University);
        assert_eq!(classify_grade(13), GradeBand::PostgraduateProfessional);
        assert_eq!(classify_grade(16), GradeBand::PostgraduateProfessional);
        assert_eq!(classify_grade(17), GradeBand::Expert);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify_grade(i64::MIN), GradeBand::BeforeGradeOne);
        assert_eq!(classify_grade(-16), GradeBand::BeforeGradeOne);
        assert_eq!(classify_grade(i64::MAX), GradeBand::Expert);
    }

    #[test]
    fn test_bands_partition_integers() {
        for grade in -50..=50 {
            let matching: Vec<_> = GradeBand::ALL
                .iter()
                .filter(|band| band.contains(grade))
                .collect();
            assert_eq!(matching.len(), 1, "grade {} matched {:?}", grade, matching);
            assert_eq!(*matching[0], classify_grade(grade));
        }
    }

    #[test]
    fn test_serialized_as_label() {
        for band in GradeBand::ALL {
            let json = serde_json::to_string(&band).unwrap();
            assert_eq!(json, format!("\"{}\"", band.label()));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(GradeBand::BeforeGradeOne.to_string(), "Before Grade 1");
        assert_eq!(GradeBand::MiddleHighSchool.label(), "Middle/High school");
        assert_eq!(
            GradeBand::PostgraduateProfessional.label(),
            "Postgraduate / Professional"
        );
    }
}
