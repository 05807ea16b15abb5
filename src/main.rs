use std::fs::File;
use std::io::{stdin, BufReader};

use clap::Parser;
use log::info;
use stream_advisor::pathway;
use stream_advisor::{quiz, AnswerSet, Error, Outcome, Question, Quiz, Report, TieBreak, QUIZZES};

#[derive(Parser)]
#[command(about = "Suggests a stream or career from a short aptitude quiz")]
struct Args {
    /// Bundled quiz to take
    #[arg(long, default_value = "stream")]
    quiz: String,
    /// Quiz definition in JSON, instead of a bundled quiz
    #[arg(long)]
    file: Option<String>,
    /// List the bundled quizzes and exit
    #[arg(long)]
    list: bool,
    /// On a tie, pick the first category in declaration order
    #[arg(long)]
    first_declared: bool,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
    /// Print the stream → course → job flowchart of a stream as JSON and exit
    #[arg(long)]
    flow: Option<String>,
    /// Print the course → job flowchart of a course as JSON and exit
    #[arg(long)]
    jobs: Option<String>,
    /// Print the branch → career flowchart of an engineering branch as JSON and exit
    #[arg(long)]
    branch: Option<String>,
    /// Print what a career involves and exit
    #[arg(long)]
    career: Option<String>,
    /// List the colleges offering a course and exit
    #[arg(long)]
    colleges: Option<String>,
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Args::parse();

    if args.list {
        for quiz in QUIZZES.iter() {
            println!("{:<10} {}", quiz.name, quiz.bank.title());
        }
        return Ok(());
    }

    if let Some(stream) = &args.flow {
        match pathway::flow_for(stream) {
            Some(graph) => println!("{}", serde_json::to_string_pretty(&graph)?),
            None => println!(
                "Unknown stream '{}'. Choose one of: {}",
                stream,
                pathway::STREAMS.names().collect::<Vec<_>>().join(", ")
            ),
        }
        return Ok(());
    }

    if let Some(course) = &args.jobs {
        print_graph(pathway::jobs_flow(course), "course", course)?;
        return Ok(());
    }

    if let Some(branch) = &args.branch {
        print_graph(pathway::branch_flow(branch), "branch", branch)?;
        return Ok(());
    }

    if let Some(name) = &args.career {
        match pathway::career_details(name) {
            Some(detail) => {
                println!("{}", detail.name);
                println!("{}", detail.description);
                println!("Skills: {}", detail.skills.join(", "));
                println!("Average salary: {}", detail.average_salary);
            }
            None => println!("No details for career '{}'.", name),
        }
        return Ok(());
    }

    if let Some(course) = &args.colleges {
        let colleges = pathway::colleges_for(course);
        if colleges.is_empty() {
            println!("No colleges listed for '{}'.", course);
        }
        for college in colleges {
            println!("{}", college);
        }
        return Ok(());
    }

    let mut quiz = match &args.file {
        Some(path) => Quiz::from_reader(BufReader::new(File::open(path)?))?,
        None => quiz(&args.quiz)?.clone(),
    };
    if args.first_declared {
        quiz = quiz.with_tie_break(TieBreak::FirstDeclared);
    }
    info!("starting quiz '{}'", quiz.name);

    let mut buffer = String::new();
    let mut answers = AnswerSet::default();

    println!("{}", quiz.bank.title());
    for question in quiz.bank.questions() {
        println!();
        println!("{}. {}", question.id, question.text);
        for (number, option) in question.options.iter().enumerate() {
            println!("  {} => {}", number + 1, option.text);
        }
        loop {
            buffer.clear();
            if stdin().read_line(&mut buffer)? == 0 {
                println!("Quiz abandoned.");
                return Ok(());
            }
            match choose(buffer.trim(), question) {
                Some(option) => {
                    answers.push(option);
                    break;
                }
                None => println!(
                    "Please answer with a number from 1 to {}.",
                    question.options.len()
                ),
            }
        }
    }

    match quiz.evaluate(&answers) {
        Ok(report) if args.json => println!("{}", serde_json::to_string_pretty(&report)?),
        Ok(report) => print_report(&report),
        Err(e) => {
            info!("scoring failed: {}", e);
            println!("We could not score this attempt ({}). Please take the quiz again.", e);
        }
    }
    Ok(())
}

fn print_graph(graph: Option<pathway::FlowGraph>, kind: &str, name: &str) -> Result<(), Error> {
    match graph {
        Some(graph) => println!("{}", serde_json::to_string_pretty(&graph)?),
        None => println!("Unknown {} '{}'.", kind, name),
    }
    Ok(())
}

fn choose<'a>(value: &str, question: &'a Question) -> Option<&'a str> {
    let number = value.parse::<usize>().ok()?;
    question
        .options
        .get(number.checked_sub(1)?)
        .map(|option| option.text.as_str())
}

fn print_report(report: &Report) {
    println!();
    match &report.outcome {
        Outcome::Winner { category } => println!("Suggested path: {}", category),
        Outcome::Undetermined { tied } => {
            let tied = tied.iter().map(|c| c.as_str()).collect::<Vec<_>>();
            println!("No clear winner between: {}", tied.join(", "));
        }
    }
    println!("{}", report.guidance.heading);
    println!("{}", report.guidance.body);
    if !report.guidance.next_step.is_empty() {
        println!("Next step: {}", report.guidance.next_step);
    }
    if !report.alternates.is_empty() {
        println!("Other possible options:");
        for alternate in &report.alternates {
            match (&alternate.count, &alternate.note) {
                (Some(count), Some(note)) => {
                    println!("  {} ({}) - {}", alternate.category, count, note)
                }
                (Some(count), None) => println!("  {} ({})", alternate.category, count),
                (None, Some(note)) => println!("  {} - {}", alternate.category, note),
                (None, None) => println!("  {}", alternate.category),
            }
        }
    }
}
