//! Command-line presentation layer.
//!
//! Collects raw input, lowercases it, calls the [`Roster`], and renders the
//! result to the given writer.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::models::StudentInput;
use crate::render;
use crate::roster::Roster;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Student enrollment records grouped by sport and age category")]
pub struct Cli {
    /// Path to the JSON data file (overrides SPORTS_ROSTER_DATA)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which bucket a command works on.
#[derive(Args, Debug, Clone)]
pub struct BucketArgs {
    #[arg(long)]
    pub sport: String,

    #[arg(long)]
    pub age_category: String,
}

/// Every user-supplied field of a record.
#[derive(Args, Debug, Clone)]
pub struct StudentArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub class: String,

    /// Section
    #[arg(long)]
    pub sect: String,

    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    pub birth_date: String,

    #[arg(long)]
    pub father_name: String,

    #[arg(long)]
    pub mother_name: String,

    #[arg(long)]
    pub phone_no: String,

    #[arg(long, default_value = "")]
    pub email: String,
}

impl From<StudentArgs> for StudentInput {
    fn from(args: StudentArgs) -> Self {
        StudentInput {
            name: args.name,
            class: args.class,
            sect: args.sect,
            birth_date: args.birth_date,
            father_name: args.father_name,
            mother_name: args.mother_name,
            phone_no: args.phone_no,
            email: args.email,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a student to a sport and age category
    Add {
        #[command(flatten)]
        bucket: BucketArgs,

        #[command(flatten)]
        student: StudentArgs,
    },
    /// View students, optionally filtered by name
    View {
        #[command(flatten)]
        bucket: BucketArgs,

        /// Only show students whose name contains this text
        #[arg(long)]
        name: Option<String>,
    },
    /// View every student in a bucket with their index
    All {
        #[command(flatten)]
        bucket: BucketArgs,
    },
    /// Show one student by index (0-based)
    Show {
        #[command(flatten)]
        bucket: BucketArgs,

        #[arg(long)]
        index: usize,
    },
    /// Replace a student's details by index (0-based)
    Edit {
        #[command(flatten)]
        bucket: BucketArgs,

        #[arg(long)]
        index: usize,

        #[command(flatten)]
        student: StudentArgs,
    },
    /// List sports and age categories with record counts
    Buckets,
}

/// Run one command against the roster, writing output to `out`.
pub fn execute(command: Commands, roster: &mut Roster, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Add { bucket, student } => {
            let input = StudentInput::from(student).normalized();
            let (index, record) = roster.add_record(
                &bucket.sport.to_lowercase(),
                &bucket.age_category.to_lowercase(),
                input,
            )?;
            writeln!(out, "Student added successfully!")?;
            write!(out, "{}", render::render_preview(index, &record))?;
        }
        Commands::View { bucket, name } => {
            let filter = name.map(|n| n.to_lowercase());
            let records = roster.view_records(
                &bucket.sport.to_lowercase(),
                &bucket.age_category.to_lowercase(),
                filter.as_deref(),
            );
            write!(out, "{}", render::render_records(&records))?;
        }
        Commands::All { bucket } => {
            let records = roster.view_all(
                &bucket.sport.to_lowercase(),
                &bucket.age_category.to_lowercase(),
            );
            write!(out, "{}", render::render_all(&records))?;
        }
        Commands::Show { bucket, index } => {
            let record = roster.get_record(
                &bucket.sport.to_lowercase(),
                &bucket.age_category.to_lowercase(),
                index,
            )?;
            write!(out, "{}", render::render_record(index, &record))?;
        }
        Commands::Edit {
            bucket,
            index,
            student,
        } => {
            let input = StudentInput::from(student).normalized();
            roster.edit_record(
                &bucket.sport.to_lowercase(),
                &bucket.age_category.to_lowercase(),
                index,
                input,
            )?;
            writeln!(out, "Student updated successfully!")?;
        }
        Commands::Buckets => {
            write!(out, "{}", render::render_buckets(&roster.buckets()))?;
        }
    }

    Ok(())
}
