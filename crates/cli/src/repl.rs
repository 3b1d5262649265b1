//! Interactive prompt loop.
//!
//! Prompts for a vehicle name to add miles to, the `search` keyword to
//! look entries up, or an empty line to quit. All normalization and
//! validation happens in the core; this loop only prompts, parses, and
//! prints. Store errors are displayed and the loop continues.

use anyhow::Result;
use mileage_core::MileageDb;
use mileage_core::input;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

type InputLines = Lines<BufReader<Stdin>>;

pub async fn run(db: &MileageDb) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = prompt(&mut lines, "Enter vehicle name to add, \"search\" to find an entry, or press enter to quit: ").await?;
        let vehicle = match line {
            Some(line) => input::normalize(Some(line.trim())),
            None => break,
        };
        if vehicle.is_empty() {
            break;
        }

        if vehicle == "SEARCH" {
            let Some(query) = prompt(&mut lines, "Entry to search for (press enter to list everything): ").await? else {
                break;
            };
            match db.search(Some(query.trim())).await {
                Ok(rows) => {
                    for row in rows {
                        println!("{row}");
                    }
                }
                Err(e) => println!("{e}"),
            }
        } else {
            let Some(miles) = prompt(&mut lines, &format!("Enter new miles for {vehicle}: ")).await? else {
                break;
            };
            let miles = miles.trim();
            if !input::is_valid_number(miles) {
                println!("Miles must be a non-negative number");
                continue;
            }
            match miles.parse::<f64>() {
                Ok(delta) => {
                    if let Err(e) = db.add_miles(Some(&vehicle), delta).await {
                        println!("{e}");
                    }
                }
                Err(_) => println!("Miles must be a non-negative number"),
            }
        }
    }

    Ok(())
}

async fn prompt(lines: &mut InputLines, text: &str) -> Result<Option<String>> {
    print!("{text}");
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}
