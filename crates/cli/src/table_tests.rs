// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn render(t: &Table) -> String {
    let mut buf = Vec::new();
    t.render(&mut buf);
    String::from_utf8(buf).unwrap()
}

#[test]
fn empty_table_prints_placeholder() {
    let t = Table::plain(vec![Column::left("JOB_ID")]);
    assert_eq!(render(&t), "(none)\n");
}

#[test]
fn columns_align_and_pad_to_widest_cell() {
    let mut t = Table::plain(vec![Column::left("JOB_ID"), Column::right("SHARDS")]);
    t.row(vec!["abc".into(), "3".into()]);
    t.row(vec!["abcdefgh".into(), "120".into()]);
    let out = render(&t);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], format!("{:<8}  {:>6}", "JOB_ID", "SHARDS"));
    assert_eq!(lines[1], format!("{:<8}  {:>6}", "abc", "3"));
    assert_eq!(lines[2], format!("{:<8}  {:>6}", "abcdefgh", "120"));
}

#[test]
fn last_column_is_not_padded() {
    let mut t = Table::plain(vec![Column::left("A"), Column::left("MESSAGE")]);
    t.row(vec!["x".into(), "short".into()]);
    let out = render(&t);
    assert!(out.lines().nth(1).unwrap().ends_with("short"));
}
