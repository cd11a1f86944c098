// toyfront: LL(1) front end with panic-mode recovery

use std::fs;
use std::io;
use std::process;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use toyfront::cli::{self, Mode, SAMPLE_PROGRAM};
use toyfront::parser::Parser;
use toyfront::report;
use toyfront::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args();
    let program_name = args.next().unwrap_or_else(|| "toyfront".to_string());

    let options = match cli::parse_args(args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprint!("{}", cli::usage(&program_name));
            process::exit(1);
        }
    };

    if options.mode == Mode::Help {
        print!("{}", cli::usage(&program_name));
        return Ok(());
    }

    // Read source code
    let (name, source) = match &options.path {
        Some(path) => {
            if !path.exists() {
                eprintln!("Error: File '{}' not found", path.display());
                eprint!("{}", cli::usage(&program_name));
                process::exit(1);
            }
            (path.display().to_string(), fs::read_to_string(path)?)
        }
        None => ("<built-in sample>".to_string(), SAMPLE_PROGRAM.to_string()),
    };

    if options.mode == Mode::Tokens {
        print!("{}", report::render_tokens(&source));
        return Ok(());
    }

    eprintln!("Parsing {}...", name);
    let (result, trace) = Parser::new(&source).parse_traced();

    match &result {
        Ok(tree) => eprintln!(
            "Parsed successfully. {} node(s) in the syntax tree.",
            tree.node_count()
        ),
        Err(failure) => eprintln!("Found {} error(s).", failure.len()),
    }

    match options.mode {
        Mode::Print => {
            // Tree to stdout, diagnostics to stderr
            let rendered = report::render_outcome(&result);
            if result.is_ok() {
                print!("{}", rendered);
            } else {
                eprint!("{}", rendered);
                process::exit(1);
            }
        }
        Mode::Trace => {
            print!("{}", report::render_trace(&trace));
            if result.is_err() {
                process::exit(1);
            }
        }
        Mode::Tui => run_tui(App::new(source, result, trace))?,
        Mode::Tokens | Mode::Help => {}
    }

    Ok(())
}

fn run_tui(mut app: App) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
