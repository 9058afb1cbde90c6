use std::collections::BTreeMap;
use std::path::PathBuf;

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::error::CladetkError::{BedLineError, VariantListParseError, VcfLineError};
use crate::io::read_lines;

/// Read the fixed variant list. Each line is kept verbatim for output and
/// its first comma-separated field is the genome position keying the line.
pub fn read_variant_list(path: &PathBuf) -> Result<(Vec<String>, Vec<u64>)> {
    let mut lines = vec![];
    let mut positions = vec![];

    for line in read_lines(path)?.map_while(Result::ok) {
        let line = line.trim_end().to_string();
        let first = line.split(',').next().unwrap_or_default();
        let pos: u64 = first
            .parse()
            .map_err(|_| eyre!(VariantListParseError(line.clone())))?;

        positions.push(pos);
        lines.push(line);
    }

    Ok((lines, positions))
}

/// Positions of PASS variant calls on chrY, mapped to `pos.ref.alt`.
pub fn analyze_vcf(path: &PathBuf) -> Result<BTreeMap<u64, String>> {
    let mut calls = BTreeMap::new();

    for line in read_lines(path)?.map_while(Result::ok) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.first() != Some(&"chrY") {
            continue;
        }
        if fields.len() < 7 {
            return Err(eyre!(VcfLineError(line.clone())));
        }
        if fields[6] == "PASS" && fields[3] != "." && fields[4] != "." {
            let pos: u64 = fields[1].parse().map_err(|_| eyre!(VcfLineError(line.clone())))?;
            calls.insert(pos, format!("{}.{}.{}", fields[1], fields[3], fields[4]));
        }
    }

    Ok(calls)
}

/// Inclusive (start, stop) segments covered on chrY.
pub fn analyze_bed(path: &PathBuf) -> Result<Vec<(u64, u64)>> {
    let mut segments = vec![];

    for line in read_lines(path)?.map_while(Result::ok) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.first() != Some(&"chrY") {
            continue;
        }
        let (Some(start), Some(stop)) = (fields.get(1), fields.get(2)) else {
            return Err(eyre!(BedLineError(line.clone())));
        };
        let start: u64 = start.parse().map_err(|_| eyre!(BedLineError(line.clone())))?;
        let stop: u64 = stop.parse().map_err(|_| eyre!(BedLineError(line.clone())))?;
        segments.push((start, stop));
    }

    Ok(segments)
}

/// Coverage annotation for one position: `;nc` when no segment covers it,
/// blank when covered strictly inside a segment, and `;cbl` / `;cbu` /
/// `;cblu` at lower / upper / single-base segment boundaries. The first
/// covering segment wins.
pub fn make_call(pos: u64, segments: &[(u64, u64)]) -> &'static str {
    for (start, stop) in segments {
        if *start <= pos && pos <= *stop {
            return match (*start == pos, *stop == pos) {
                (true, true) => ";cblu",
                (true, false) => ";cbl",
                (false, true) => ";cbu",
                (false, false) => "",
            };
        }
    }
    ";nc"
}

/// Extend every variant-list line with one sample's calls.
pub fn annotate_lines(
    lines: &mut [String],
    positions: &[u64],
    vcf_calls: &BTreeMap<u64, String>,
    bed_calls: &[(u64, u64)],
) {
    for (line, pos) in lines.iter_mut().zip(positions) {
        line.push(',');
        if let Some(call) = vcf_calls.get(pos) {
            line.push_str(call);
        }
        line.push_str(make_call(*pos, bed_calls));
    }
}

#[doc(hidden)]
#[tracing::instrument]
pub fn run(variant_list: PathBuf, files: Vec<PathBuf>) -> Result<()> {
    let (mut lines, positions) = read_variant_list(&variant_list)?;

    for file in &files {
        let vcf_calls = analyze_vcf(&file.with_extension("vcf"))?;
        let bed_calls = analyze_bed(&file.with_extension("bed"))?;
        annotate_lines(&mut lines, &positions, &vcf_calls, &bed_calls);
    }

    for line in lines {
        println!("{line}");
    }

    Ok(())
}
