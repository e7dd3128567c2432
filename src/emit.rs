//! Canonical emitter (component C11): the structured JSON record (schema
//! v1, §6.2) and the line-based text record (§6.1), both written to a
//! `Write` sink so the CLI can target stdout or a file without this module
//! knowing which.

use std::io::{self, Write};

use crate::record::{AnalysisOutput, PairKind, PairRecord};

pub fn write_json<W: Write>(output: &AnalysisOutput, writer: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(writer, output).map_err(io::Error::from)
}

pub fn write_text<W: Write>(output: &AnalysisOutput, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "BEGIN_base-pair")?;
    for record in &output.core.base_pairs {
        writeln!(writer, "{}", render_record_line(record))?;
    }
    writeln!(writer, "END_base-pair")?;

    writeln!(writer, "BEGIN_multiplets")?;
    for multiplet in &output.core.multiplets {
        writeln!(writer, "{}", multiplet.text)?;
    }
    writeln!(writer, "END_multiplets")?;

    writeln!(
        writer,
        "The total base pairs = {} (from {} bases)",
        output.core.stats.total_pairs, output.core.stats.total_bases
    )?;
    for (key, count) in &output.core.stats.pair_type_counts {
        writeln!(writer, "{key}\t{count}")?;
    }

    Ok(())
}

fn render_record_line(record: &PairRecord) -> String {
    let left = format!("{}_{}", record.i, record.j);
    let chain_i = format!("{}:{}", record.residue_i.chain_id, record.residue_i.resseq_icode());
    let chain_j = format!("{}:{}", record.residue_j.resseq_icode(), record.residue_j.chain_id);
    let bases = format!("{}-{}", record.base_i, record.base_j);

    let geometry_field = match record.kind {
        PairKind::Stacked => "stacked".to_string(),
        _ => format!(
            "{} {}",
            record.lw.as_deref().unwrap_or("?/?"),
            record.orientation.unwrap_or("n/a")
        ),
    };

    let syn_field = format!("{}{}", syn_char(record.syn_i), syn_char(record.syn_j));

    let saenger_field = match record.kind {
        PairKind::Stacked => String::new(),
        _ => record.saenger.unwrap_or("n/a").to_string(),
    };

    let note_field = record.note.as_deref().unwrap_or("");

    format!(
        "{left}, {chain_i} {bases} {chain_j}  {geometry_field}   {syn_field}   {saenger_field} {note_field}"
    )
    .trim_end()
    .to_string()
}

fn syn_char(is_syn: bool) -> char {
    if is_syn {
        's'
    } else {
        '.'
    }
}
