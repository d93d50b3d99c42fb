//! Walk one session through the builtin questionnaire and print the result.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example walkthrough
//! ```

use anyhow::Result;
use chrono::Local;

use natal_catalog::builtin;
use natal_core::model::{Archetype, OptionId};
use natal_flow::{export, Advance, DiagnosticFlow};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut flow = DiagnosticFlow::new(builtin());

    // Answer every question with its first option.
    while !flow.is_showing_result() {
        let question = flow
            .current_question()
            .ok_or_else(|| anyhow::anyhow!("no current question"))?;
        println!("STEP {} / {}", question.step, flow.catalog().len());
        println!("  {}", question.prompt);
        let choice: OptionId = question.options[0].id.clone();
        for option in &question.options {
            let marker = if option.id == choice { ">" } else { " " };
            println!("  {marker} {} {}", option.icon, option.text);
        }

        flow.select_option(flow.current_index(), choice)?;
        match flow.advance()? {
            Advance::Blocked => unreachable!("just answered"),
            Advance::Moved | Advance::Completed => {}
        }
        println!();
    }

    let result = flow
        .result()
        .ok_or_else(|| anyhow::anyhow!("flow finished without a result"))?;

    println!("── your match ──");
    for archetype in Archetype::ALL {
        let detail = flow
            .catalog()
            .detail(archetype)
            .ok_or_else(|| anyhow::anyhow!("missing detail for {archetype}"))?;
        println!("  {:>3}%  {}", result.scores.get(archetype), detail.name);
    }
    println!("── what you value ──");
    println!("  autonomy   {:>3}%", result.values.autonomy);
    println!("  safety     {:>3}%", result.values.safety);
    println!("  experience {:>3}%", result.values.experience);

    println!("── per-question match ──");
    for item in &result.item_matches {
        let bands: Vec<&str> = item.bands().iter().map(|b| b.symbol()).collect();
        println!("  Q{}  {}", item.question_index + 1, bands.join(" "));
    }

    println!(
        "\nwould export as: {}",
        export::export_file_name(Local::now().date_naive())
    );
    Ok(())
}
