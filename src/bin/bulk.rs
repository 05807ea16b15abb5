use clap::Parser;
use log::warn;
use std::fs::File;
use std::io::BufReader;
use stream_advisor::{quiz, read_bulk, Error, Outcome};

#[derive(Parser)]
struct Args {
    path: String,
    #[arg(long, default_value = "stream")]
    quiz: String,
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Args::parse();
    let quiz = quiz(&args.quiz)?;
    let reader = BufReader::new(File::open(&args.path)?);
    for row in read_bulk(reader) {
        match row {
            Ok((id, answers)) => match quiz.evaluate(&answers) {
                Ok(report) => {
                    let counts = report
                        .counts
                        .iter()
                        .flat_map(|tally| tally.iter())
                        .map(|c| format!("{}={}", c.category, c.count))
                        .collect::<Vec<_>>();
                    let outcome = match &report.outcome {
                        Outcome::Winner { category } => category.to_string(),
                        Outcome::Undetermined { .. } => "undetermined".to_string(),
                    };
                    println!(
                        "id = {}, outcome = {}, counts = [{}]",
                        id,
                        outcome,
                        counts.join(", ")
                    );
                }
                Err(e) => {
                    warn!("id = {}: {}", id, e);
                }
            },
            Err(e) => {
                warn!("{}", e);
            }
        }
    }
    Ok(())
}
