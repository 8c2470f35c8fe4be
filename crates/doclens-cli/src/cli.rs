use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "doclens")]
#[command(about = "Ask questions about business documents", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Configuration file (toml, json or yaml)")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Print results as JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Answer a question about one document")]
    Ask {
        #[arg(help = "Document to read")]
        file: PathBuf,

        #[arg(help = "The question to answer")]
        question: String,
    },

    #[command(about = "Find the best answer across a folder of documents")]
    Search {
        #[arg(help = "The question to answer")]
        question: String,

        #[arg(short, long, default_value = ".", help = "Document folder")]
        dir: PathBuf,

        #[arg(long, help = "Only search the N most recently modified documents")]
        recent: Option<usize>,
    },

    #[command(about = "List the most recently modified documents in a folder")]
    Recent {
        #[arg(short, long, default_value = ".", help = "Document folder")]
        dir: PathBuf,

        #[arg(short, long, default_value_t = 10, help = "Maximum number of documents")]
        limit: usize,
    },

    #[command(about = "Summarize a document")]
    Summarize {
        #[arg(help = "Document to read")]
        file: PathBuf,
    },

    #[command(about = "List dates, amounts, contacts and action items in a document")]
    Insights {
        #[arg(help = "Document to read")]
        file: PathBuf,
    },

    #[command(about = "Show word counts and top keywords of a document")]
    Info {
        #[arg(help = "Document to read")]
        file: PathBuf,
    },

    #[command(about = "Print the extracted plain text of a document")]
    Extract {
        #[arg(help = "Document to read")]
        file: PathBuf,
    },
}
