//! Course lookup: keyword triggers mapped to fixed programme descriptions.

use std::fmt;

/// The programmes the bot can describe, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Course {
    Cse,
    Ece,
    Mechanical,
    Civil,
}

impl Course {
    /// All courses; earlier entries win when several match.
    pub const ALL: [Course; 4] = [Course::Cse, Course::Ece, Course::Mechanical, Course::Civil];

    pub fn key(self) -> &'static str {
        match self {
            Course::Cse => "cse",
            Course::Ece => "ece",
            Course::Mechanical => "mech",
            Course::Civil => "civil",
        }
    }

    /// Lowercase substrings that identify the course.
    pub fn triggers(self) -> &'static [&'static str] {
        match self {
            Course::Cse => &["cse", "computer", "computer science"],
            Course::Ece => &["ece", "electronics", "electrical"],
            Course::Mechanical => &["mech", "mechanical", "mechanics"],
            Course::Civil => &["civil", "civil engineering"],
        }
    }

    /// Markdown description returned verbatim on a match.
    pub fn description(self) -> &'static str {
        match self {
            Course::Cse => CSE_DESCRIPTION,
            Course::Ece => ECE_DESCRIPTION,
            Course::Mechanical => MECHANICAL_DESCRIPTION,
            Course::Civil => CIVIL_DESCRIPTION,
        }
    }

    /// Whether the already-lowercased text mentions this course.
    fn matches(self, lowered: &str) -> bool {
        self.triggers().iter().any(|t| lowered.contains(t))
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Finds the first course, in priority order, whose trigger occurs in `text`.
pub fn detect_course(text: &str) -> Option<Course> {
    let lowered = text.to_lowercase();
    Course::ALL.into_iter().find(|course| course.matches(&lowered))
}

const CSE_DESCRIPTION: &str = concat!(
    "**CSE (Computer Science & Engineering)**  \n",
    "Focus: Programming, data structures, algorithms, software development, databases, ",
    "operating systems, AI, ML, data science, cloud computing.  \n",
    "Career paths: Software engineer, data scientist, ML engineer, devops, product engineer.  \n",
    "Why choose CSE: High industry demand, strong placement opportunities, wide scope in ",
    "startups and product companies.",
);

const ECE_DESCRIPTION: &str = concat!(
    "**ECE (Electronics & Communication Engineering)**  \n",
    "Focus: Analog & digital electronics, communication systems, signal processing, ",
    "microprocessors, embedded systems, VLSI.  \n",
    "Career paths: Embedded systems engineer, hardware design engineer, telecom engineer, IoT developer.  \n",
    "Why choose ECE: Good for hardware + software crossover roles, IoT and telecom sectors.",
);

const MECHANICAL_DESCRIPTION: &str = concat!(
    "**Mechanical Engineering**  \n",
    "Focus: Thermodynamics, mechanics, manufacturing processes, CAD/CAM, materials, machine design.  \n",
    "Career paths: Design engineer, production/plant engineer, automotive engineer, R&D.  \n",
    "Why choose Mechanical: Strong core engineering fundamentals, opportunities in ",
    "manufacturing and automotive industries.",
);

const CIVIL_DESCRIPTION: &str = concat!(
    "**Civil Engineering**  \n",
    "Focus: Structural analysis, construction technology, geotechnical engineering, ",
    "transportation engineering, environmental engineering.  \n",
    "Career paths: Structural engineer, site engineer, project manager, urban planner.  \n",
    "Why choose Civil: Key role in infrastructure projects and construction sector, ",
    "long-term demand in public and private projects.",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_each_course() {
        assert_eq!(detect_course("Tell me about CSE"), Some(Course::Cse));
        assert_eq!(detect_course("computer science please"), Some(Course::Cse));
        assert_eq!(detect_course("Electrical branch?"), Some(Course::Ece));
        assert_eq!(detect_course("Tell me about mechanical"), Some(Course::Mechanical));
        assert_eq!(detect_course("CIVIL"), Some(Course::Civil));
        assert_eq!(detect_course("hostel details"), None);
        assert_eq!(detect_course(""), None);
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(detect_course("civil or computer?"), Some(Course::Cse));
        assert_eq!(detect_course("mechanical vs electronics"), Some(Course::Ece));
        assert_eq!(detect_course("civil and mech"), Some(Course::Mechanical));
    }

    #[test]
    fn test_plain_substring_matching() {
        // "ece" inside another word still counts
        assert_eq!(detect_course("I received the form"), Some(Course::Ece));
    }

    #[test]
    fn test_descriptions() {
        for course in Course::ALL {
            assert!(!course.description().is_empty());
            assert!(course.description().starts_with("**"));
        }
        assert!(Course::Mechanical.description().starts_with("**Mechanical Engineering**  \n"));
        assert_eq!(Course::Mechanical.to_string(), "mech");
    }
}
