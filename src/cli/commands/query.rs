use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Subject;
use crate::query::client;
use crate::ui::messages::{info, warning};
use crate::utils::colors::{RESET, color_for_optional_field};
use crate::utils::table::{Column, Table};

/// Handle the `query` command: fetch (or read from a saved response) and
/// print the normalized timeline data without rendering anything.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Query {
        subject,
        input,
        json,
    } = cmd
    {
        let subject = Subject::new(subject.as_str());
        let result = client::load(&subject, input.as_deref(), cfg)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        let Some(life) = &result.life else {
            warning(format!("No timeline data found for {}", subject));
            return Ok(());
        };

        info(format!("Timeline data for {}", subject));
        println!("   born : {}", life.birth);

        let died = life.death.map(|d| d.to_string());
        println!(
            "   died : {}{}{}",
            color_for_optional_field(died.as_deref()),
            died.as_deref().unwrap_or("—"),
            RESET
        );
        println!();

        if result.works.is_empty() {
            warning("No catalogued works found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column {
                header: "TITLE".to_string(),
                width: 32,
            },
            Column {
                header: "PUBLISHED".to_string(),
                width: 10,
            },
            Column {
                header: "QID".to_string(),
                width: 12,
            },
            Column {
                header: "CLAIMS".to_string(),
                width: 6,
            },
            Column {
                header: "LINK".to_string(),
                width: 36,
            },
        ]);

        for work in &result.works {
            table.add_row(vec![
                work.label.clone(),
                work.earliest_publication.to_string(),
                work.qid.clone(),
                work.claim_count.to_string(),
                work.link_token.clone().unwrap_or_default(),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
