use std::io::{self, BufRead};

use catalog::CourseIndex;
use courseplanner::loader;
use courseplanner::menu::{self, MenuChoice};
use log::debug;

/// Input consumed when no path argument is given.
const DEFAULT_DATA_FILE: &str = "data/courses.csv";

fn main() -> io::Result<()> {
    env_logger::builder().init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_FILE.into());
    let mut index = CourseIndex::new();

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        println!("{}", menu::MENU);
        println!("Enter choice: ");

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            // stdin is gone, leave the same way choice 9 would
            break;
        }

        let choice = MenuChoice::parse(&input);
        debug!(target: "planner", "input {:?} -> {choice:?}", input.trim());

        match choice {
            Some(MenuChoice::Load) => {
                println!("Loading CSV file: {path}");
                match loader::load_file(&path, &mut index) {
                    Ok(count) => println!("Loaded {count} courses\n"),
                    Err(e) => eprintln!("Load failed: {e}\n"),
                }
            }
            Some(MenuChoice::ListAll) => {
                for course in index.list_all() {
                    println!("{}", menu::course_line(course));
                }
                println!();
            }
            Some(MenuChoice::Find) => {
                println!("What course do you want to see?");
                input.clear();
                if stdin.lock().read_line(&mut input)? == 0 {
                    break;
                }

                match index.search(input.trim()) {
                    Ok(Some(course)) => println!("{}\n", menu::course_details(course)),
                    Ok(None) => println!("Course not found\n"),
                    Err(e) => eprintln!("{e}\n"),
                }
            }
            Some(MenuChoice::Exit) => break,
            None => println!("Invalid Option"),
        }
    }

    println!("Thank you for using the course planner!");
    Ok(())
}
