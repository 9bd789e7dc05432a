// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the restricted-array command-line interface.
//!
//! Four subcommands: `demo` runs everything over a random array, `inspect`
//! does the same for values you supply, `search` answers a single membership
//! query, and `sort` prints the sorted (optionally reversed) array.
//!
//! Values are given as a comma- or space-separated list: `33,12,78,4,56`.

pub mod display;

use clap::{Parser, Subcommand};
use restricted_array::Value;

#[derive(Parser)]
#[command(
    name = "restricted-array",
    about = "Array algorithms over a fixed-capacity integer array",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a random array and run every algorithm on it
    Demo {
        /// Fixed capacity (1-20). Random when omitted
        #[arg(short, long)]
        capacity: Option<usize>,

        /// Seed for reproducible arrays
        #[arg(short, long)]
        seed: Option<u64>,

        /// Also search for this value
        #[arg(short, long)]
        target: Option<Value>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run every algorithm on the given values
    Inspect {
        /// Values to load, e.g. 33,12,78,4,56
        #[arg(value_delimiter = ',')]
        values: Vec<Value>,

        /// Capacity of the array. Defaults to the number of values
        #[arg(short, long)]
        capacity: Option<usize>,

        /// Also search for this value
        #[arg(short, long)]
        target: Option<Value>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search the given values for a target
    Search {
        /// Values to load, e.g. 33,12,78,4,56
        #[arg(value_delimiter = ',')]
        values: Vec<Value>,

        /// Value to look for
        #[arg(short, long)]
        target: Value,

        /// Sort first, then use binary search instead of a linear scan
        #[arg(long)]
        binary: bool,
    },

    /// Selection-sort the given values and print them
    Sort {
        /// Values to load, e.g. 33,12,78,4,56
        #[arg(value_delimiter = ',')]
        values: Vec<Value>,

        /// Print in descending order
        #[arg(short, long)]
        reverse: bool,
    },
}
