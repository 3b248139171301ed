use std::process;

use course_splitter::display::{print_candidates, proposal_file_name, write_proposal_to_file};
use course_splitter::engine::{partition_section, render_proposal, select_shift};
use course_splitter::Splitter;

const MIN_STUDENTS_DEFAULT: usize = 5;

fn usage() -> ! {
    eprintln!(
        "Usage: course-splitter <roster.csv> <catalog.json> [course] [min_students] [slot]"
    );
    eprintln!("  With no course: lists the offered courses.");
    eprintln!("  With a course: proposes split slots and writes a proposal file.");
    process::exit(2);
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error processing data: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        usage();
    }
    let roster_path = &args[1];
    let catalog_path = &args[2];

    println!("Loading roster and schedule catalog...");
    let splitter = Splitter::load(roster_path, catalog_path)?;

    let course = match args.get(3) {
        Some(course) => course.clone(),
        None => {
            println!("\nOffered courses:");
            for course in splitter.courses_offered() {
                println!("  {}", course);
            }
            return Ok(());
        }
    };

    let min_students = match args.get(4) {
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if n >= 1 => n,
            _ => {
                eprintln!("min_students must be a positive integer, got '{}'", raw);
                usage();
            }
        },
        None => MIN_STUDENTS_DEFAULT,
    };

    // Current section info
    let current = splitter.current_slot(&course)?;
    let students = splitter.students_in_course(&course)?;
    println!("\n=== Course Info ===");
    println!("Selected course: {}", course);
    println!("Slot: {}", current);
    println!("Number of students: {}", students.len());

    // Ranked candidates above the threshold
    let suggested = splitter.propose_sections(&course, min_students)?;
    print_candidates(splitter.catalog(), &suggested);

    // Pick the requested slot, or default to the top-ranked one
    let new_slot = match args.get(5) {
        Some(slot) => slot.clone(),
        None => suggested[0].0.clone(),
    };

    let to_shift = select_shift(&suggested, &new_slot);
    if to_shift.is_empty() {
        println!("\nNo students available for slot {}.", new_slot);
        return Ok(());
    }

    let (remaining, shifted) = partition_section(&students, &to_shift);
    println!("\n=== Slot {}'s proposed shifts ===", new_slot);
    println!(
        "Remaining students in slot {} ({}): {}",
        current,
        remaining.len(),
        remaining.join(", ")
    );
    println!(
        "Students to shift to new slot {} ({}): {}",
        new_slot,
        shifted.len(),
        shifted.join(", ")
    );

    let proposal = render_proposal(&course, &current, &new_slot, &remaining, &shifted);
    let file_name = proposal_file_name(&course);
    write_proposal_to_file(&proposal, &file_name)?;
    println!("\nProposal saved to {}", file_name);

    Ok(())
}
