//! leetdict - Leetspeak password dictionary generator
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::io::IsTerminal;
use std::process;

use leetdict::cli::Args;
use leetdict::dedup::create_deduplicator;
use leetdict::generator::{Generator, GeneratorConfig};
use leetdict::output::{write_candidates, CandidateWriter};
use leetdict::progress::{
    create_progress_bar, format_number, print_banner, print_error, print_header, print_info,
    print_success, print_warning, GenerationStats,
};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if args.quiet {
        std::env::set_var("RUST_LOG", "error");
    } else if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let interactive = !args.quiet && std::io::stderr().is_terminal();

    // Banner only when a person is watching stderr
    if interactive && !args.number {
        print_banner();
    }

    let config = GeneratorConfig::from_args(&args)?;
    let generator = Generator::from_config(&config);

    if args.verbose {
        print_config(&args, &config);
    }

    if args.number {
        match generator.unfiltered_possibilities() {
            Ok(total) => log::debug!("unfiltered total: {}", total),
            Err(e) => log::debug!("unfiltered total unavailable: {}", e),
        }
        println!("{}", generator.possibilities()?);
        return Ok(());
    }

    // Rejects an explicit end <= start before anything is written
    let mut candidates = generator.candidates(config.start, config.end)?;
    let window_len = candidates.remaining();

    let buffer_size = args.parse_buffer_size()?;
    let mut writer = match args.output {
        Some(ref path) => CandidateWriter::file(path.clone(), buffer_size)?,
        None => CandidateWriter::stdout(buffer_size),
    };

    let mut dedup = create_deduplicator(args.unique, args.unique_strategy, window_len);
    let mut stats = GenerationStats::new();

    let pb = if args.output.is_some() && interactive {
        create_progress_bar(u64::try_from(window_len).unwrap_or(u64::MAX), "Generating...")
    } else {
        indicatif::ProgressBar::hidden()
    };

    let outcome = write_candidates(
        candidates.by_ref(),
        &mut writer,
        dedup.as_mut(),
        &mut stats,
        &pb,
    )?;

    if outcome.cancelled {
        pb.abandon();
        log::info!("output closed after {} of {} candidates", outcome.written, window_len);
        if !args.quiet {
            print_warning(&format!(
                "Output closed after {} of {} candidates",
                format_number(outcome.written),
                format_number(window_len)
            ));
        }
    } else {
        pb.finish_and_clear();
    }

    if args.output.is_some() && !args.quiet {
        print_success(&format!(
            "{} candidates written to {}",
            format_number(outcome.written),
            writer.target()
        ));
    }

    if outcome.written == 0 && !outcome.cancelled && !args.quiet {
        print_warning("No candidates in the requested window");
    }

    if args.stats {
        let end = config.start + candidates.emitted();
        stats.print_summary(config.start, end, outcome.cancelled);
    }

    Ok(())
}

/// Print configuration summary
fn print_config(args: &Args, config: &GeneratorConfig) {
    print_header("Configuration");

    print_info(&format!("Words:        {:?}", config.words));
    print_info(&format!("Permute:      {}", config.permute));
    print_info(&format!(
        "Length:       {}..={}",
        config.filter.min(),
        config.filter.max()
    ));
    print_info(&format!("Start:        {}", config.start));
    match config.end {
        Some(end) => print_info(&format!("End:          {}", end)),
        None => print_info("End:          <all>"),
    }
    print_info(&format!(
        "Output:       {}",
        args.output
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<stdout>".to_string())
    ));
    print_info(&format!("Unique:       {}", args.unique));
}
