use catalog::Course;

/// The prompt block shown before every read.
pub const MENU: &str = "Menu:
  1. Load Data Structure
  2. Print Course List
  3. Print Course
  9. Exit";

/// The actions the planner menu understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1`: read the input file into the index
    Load,
    /// `2`: print every course in identifier order
    ListAll,
    /// `3`: prompt for an identifier and print that one course
    Find,
    /// `9`: leave the planner
    Exit,
}

impl MenuChoice {
    /// Maps a typed menu line to an action, `None` for anything the menu
    /// does not offer.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Load),
            "2" => Some(Self::ListAll),
            "3" => Some(Self::Find),
            "9" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// `id, title`, the one-line form used by the course listing.
pub fn course_line(course: &Course) -> String {
    format!("{}, {}", course.id, course.title)
}

/// The detailed form used after a successful search: the course line plus
/// its prerequisites separated by spaces.
pub fn course_details(course: &Course) -> String {
    format!(
        "{}\nPrerequisites: {}",
        course_line(course),
        course.prerequisites.join(" ")
    )
}

#[cfg(test)]
mod test {
    use super::{MenuChoice, course_details, course_line};
    use catalog::course;

    #[test]
    fn parses_the_four_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Load));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::ListAll));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Find));
        assert_eq!(MenuChoice::parse("9"), Some(MenuChoice::Exit));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(MenuChoice::parse(" 2 \n"), Some(MenuChoice::ListAll));
    }

    #[test]
    fn rejects_everything_else() {
        for input in ["", "4", "99", "load", "1 2"] {
            assert_eq!(MenuChoice::parse(input), None, "input {input:?}");
        }
    }

    #[test]
    fn formats_a_course_line() {
        let course = course!("205", "Data Structures", "101");
        assert_eq!(course_line(&course), "205, Data Structures");
    }

    #[test]
    fn formats_details_with_prerequisites() {
        let course = course!("405", "Capstone", "305", "311");
        assert_eq!(
            course_details(&course),
            "405, Capstone\nPrerequisites: 305 311"
        );
    }

    #[test]
    fn formats_details_without_prerequisites() {
        let course = course!("101", "Intro");
        assert_eq!(course_details(&course), "101, Intro\nPrerequisites: ");
    }
}
