// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Renders coordinator responses as plain tables or pretty JSON.

use clap::ValueEnum;
use mrwc_core::WordCount;
use mrwc_coordinator::http::dto::{EngineInfo, JobResponse, LogEntryResponse, StatsResponse};
use serde::Serialize;

use crate::table::{Column, Table};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(err) => eprintln!("failed to render JSON: {err}"),
    }
}

fn top_words_cell(top_words: &Option<Vec<WordCount>>) -> String {
    match top_words {
        None => "-".to_string(),
        Some(words) if words.is_empty() => "(empty)".to_string(),
        Some(words) => words.iter().map(|w| format!("{}:{}", w.word, w.count)).collect::<Vec<_>>().join(", "),
    }
}

pub fn print_job(job: &JobResponse, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(job),
        OutputFormat::Text => {
            println!("job_id:      {}", job.job_id);
            println!("status:      {}", crate::color::apply_status(&job.status));
            println!("text_length: {}", job.text_length);
            println!("num_shards:  {}", job.num_shards);
            println!("created_at:  {}", job.created_at);
            if let Some(completed_at) = &job.completed_at {
                println!("completed_at: {completed_at}");
            }
            if let Some(duration) = job.duration_seconds {
                println!("duration_s:  {duration:.3}");
            }
            println!("top_words:   {}", top_words_cell(&job.top_words));
        }
    }
}

pub fn print_jobs(jobs: &[JobResponse], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(jobs),
        OutputFormat::Text => {
            let mut table = Table::new(vec![
                Column::left("JOB_ID"),
                Column::status("STATUS"),
                Column::right("SHARDS"),
                Column::left("TOP_WORDS"),
            ]);
            for job in jobs {
                table.row(vec![job.job_id.clone(), job.status.clone(), job.num_shards.to_string(), top_words_cell(&job.top_words)]);
            }
            table.render(&mut std::io::stdout());
        }
    }
}

pub fn print_engines(engines: &[EngineInfo], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(engines),
        OutputFormat::Text => {
            let mut table = Table::new(vec![
                Column::left("ENGINE_ID"),
                Column::left("ROLE"),
                Column::status("STATUS"),
                Column::right("LOAD"),
                Column::right("CAPACITY"),
            ]);
            for engine in engines {
                table.row(vec![
                    engine.engine_id.clone(),
                    engine.role.clone(),
                    engine.status.to_string(),
                    engine.current_load.to_string(),
                    engine.capacity.to_string(),
                ]);
            }
            table.render(&mut std::io::stdout());
        }
    }
}

pub fn print_logs(entries: &[LogEntryResponse], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(entries),
        OutputFormat::Text => {
            let mut table = Table::new(vec![Column::muted("TIMESTAMP"), Column::left("MESSAGE")]);
            for entry in entries {
                table.row(vec![entry.timestamp.clone(), entry.message.clone()]);
            }
            table.render(&mut std::io::stdout());
        }
    }
}

pub fn print_stats(stats: &StatsResponse, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(stats),
        OutputFormat::Text => {
            println!("total_engines:    {}", stats.total_engines);
            println!("mappers:          {}", stats.mappers);
            println!("reducers:         {}", stats.reducers);
            println!("map_queue_size:   {}", stats.map_queue_size);
            println!("reduce_queue_size: {}", stats.reduce_queue_size);
            println!("total_jobs:       {}", stats.total_jobs);
            println!("active_jobs:      {}", stats.active_jobs);
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
