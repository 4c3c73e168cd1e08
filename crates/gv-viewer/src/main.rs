//! glyphview - Main Entry Point

use std::io::{self, Stderr, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use gv_unicode::BlockTable;
use gv_viewer::model::BLOCK_TABLE_ERROR;
use gv_viewer::{Action, Config, TerminalView, Viewer};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "glyphview", about = "Inspect how fonts render Unicode blocks")]
struct Cli {
    /// Config file (default: config.json beside the executable)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Block table to use instead of the bundled one
    #[arg(long, global = true)]
    blocks: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List display blocks
    Blocks,
    /// Load a font directory and list the accepted fonts
    Fonts {
        /// Font directory (default: the configured one)
        dir: Option<PathBuf>,
    },
    /// Print the text of a block
    Show(Selection),
    /// Print the tooltip of a character of the block text
    Inspect {
        #[command(flatten)]
        selection: Selection,
        /// UTF-16 position in the block text
        #[arg(long)]
        at: usize,
    },
}

#[derive(Args)]
struct Selection {
    /// Font directory
    #[arg(long)]
    dir: Option<PathBuf>,
    /// Font file name
    #[arg(long)]
    font: Option<String>,
    /// Display block index
    #[arg(long)]
    block: Option<usize>,
    /// Hex code point to look up
    #[arg(long = "char")]
    char_code: Option<String>,
}

/// A viewer with its config, saved when the session closes
struct Session {
    viewer: Viewer,
    view: TerminalView<Stderr>,
    config_path: PathBuf,
}

impl Session {
    fn open(table: gv_unicode::Result<BlockTable>, config_path: Option<PathBuf>) -> Self {
        let config_path = config_path.unwrap_or_else(Config::default_path);
        let config = Config::load_or_default(&config_path);

        let viewer = Viewer::new(table, &config);
        if let Some(error) = &viewer.model().block_error {
            eprintln!("{}", error);
        }

        Self {
            viewer,
            view: TerminalView::new(std::io::stderr()),
            config_path,
        }
    }

    fn dispatch(&mut self, action: Action) {
        self.viewer.dispatch(action, &mut self.view);
    }

    /// Startup sequence, then the requested selection
    fn select(&mut self, selection: Selection) {
        self.viewer.start(selection.dir, &mut self.view);
        if let Some(font) = selection.font {
            self.dispatch(Action::SelectFont(font));
        }
        if let Some(block) = selection.block {
            self.dispatch(Action::SelectBlock(block));
        }
        if let Some(char_code) = selection.char_code {
            self.dispatch(Action::CommitCharCode(char_code));
        }
    }

    fn close(self) {
        self.viewer.config().save_or_log(&self.config_path);
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let table = match &cli.blocks {
        Some(path) => BlockTable::from_path(path),
        None => BlockTable::bundled(),
    };

    match cli.command {
        Command::Blocks => {
            list_blocks(table, &mut io::stdout().lock(), &mut io::stderr())?;
        }
        Command::Fonts { dir } => {
            let mut session = Session::open(table, cli.config);
            session.dispatch(Action::ReloadFonts(dir));
            for font in session.viewer.registry().fonts() {
                println!("{}\t{}\t{}", font.file_name, font.family, font.families.join(";"));
            }
            session.close();
        }
        Command::Show(selection) => {
            let mut session = Session::open(table, cli.config);
            session.select(selection);
            print_block(&session.viewer);
            session.close();
        }
        Command::Inspect { selection, at } => {
            let mut session = Session::open(table, cli.config);
            session.select(selection);
            session.dispatch(Action::Hover(at));
            match &session.viewer.model().tooltip {
                Some(tooltip) => println!("{}", tooltip),
                None => println!("Nothing to inspect"),
            }
            session.close();
        }
    }

    Ok(())
}

/// Print the display blocks, or the block table error when none loaded
fn list_blocks(
    table: gv_unicode::Result<BlockTable>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    match table {
        Ok(table) => {
            for (index, block) in table.display_blocks().iter().enumerate() {
                writeln!(out, "{:4} {}", index, block)?;
            }
        }
        Err(e) => {
            tracing::error!("{}", e);
            writeln!(err, "{}", BLOCK_TABLE_ERROR)?;
        }
    }
    Ok(())
}

fn print_block(viewer: &Viewer) {
    let model = viewer.model();
    let Some(block) = model.current_block() else {
        println!("No block selected");
        return;
    };
    println!("Block: {}", block);
    match model.current_font() {
        Some(font) => {
            println!("Font: {} ({})", font.file_name, font.family);
            if let Some(covered) = viewer.coverage() {
                println!("Glyphs: {}/{}", covered, block.len());
            }
        }
        None => println!("Font: none loaded from {}", model.font_dir.display()),
    }
    if let Some(range) = &model.highlight {
        println!("Highlight: UTF-16 {}..{}", range.start, range.end);
    }
    println!("{}", model.text);
}
