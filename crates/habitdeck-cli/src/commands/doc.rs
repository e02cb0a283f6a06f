//! Document store commands for CLI.

use clap::Subcommand;
use habitdeck_core::DocumentDb;

#[derive(Subcommand)]
pub enum DocAction {
    /// Store a JSON document
    Create {
        /// Document body as a JSON object
        body: String,
    },
    /// List all stored documents
    List,
    /// Fetch a document by id
    Get {
        /// Document id
        id: String,
    },
    /// Delete a document by id
    Delete {
        /// Document id
        id: String,
    },
}

pub fn run(action: DocAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = DocumentDb::open()?;

    match action {
        DocAction::Create { body } => {
            let body: serde_json::Value = serde_json::from_str(&body)?;
            let doc = db.insert(body)?;
            println!("Document created: {}", doc.id);
            println!("{}", super::render_json(&doc)?);
        }
        DocAction::List => {
            let docs = db.list()?;
            println!("{}", super::render_json(&docs)?);
        }
        DocAction::Get { id } => match db.get(&id)? {
            Some(doc) => println!("{}", super::render_json(&doc)?),
            None => println!("Document not found: {id}"),
        },
        DocAction::Delete { id } => {
            if db.delete(&id)? {
                println!("ok");
            } else {
                eprintln!("Document not found: {id}");
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
