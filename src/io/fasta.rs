// src/io/fasta.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use bio::io::fasta;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::graph::assembler::Contig;

/// Read files expected in a dataset directory, in load order
pub const DATASET_FILES: [&str; 3] = ["short_1.fasta", "short_2.fasta", "long.fasta"];

pub enum FastaWriter {
    Plain(BufWriter<File>),
    Compressed(BufWriter<GzEncoder<File>>),
}

/// Open a FASTA file for reading, handles gzipped files automatically
pub fn open_fasta<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    if path.extension().map_or(false, |ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Read every sequence of a FASTA file, upper-cased.
///
/// Multi-line records are joined. Records with an empty sequence are
/// skipped. Other characters are left for the graph builder to reject.
pub fn read_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let reader = fasta::Reader::new(open_fasta(path)?);

    let mut sequences = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.seq().is_empty() {
            warn!("Skipping empty record '{}' in {}", record.id(), path.display());
            continue;
        }
        sequences.push(String::from_utf8_lossy(record.seq()).to_ascii_uppercase());
    }

    debug!("Read {} sequences from {}", sequences.len(), path.display());
    Ok(sequences)
}

/// Read several FASTA files and concatenate their sequences in order.
pub fn read_fasta_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<String>> {
    let mut reads = Vec::new();
    for path in paths {
        reads.extend(read_fasta(path)?);
    }
    Ok(reads)
}

/// Paths of the dataset files inside `dir`
pub fn dataset_paths<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    DATASET_FILES.iter().map(|name| dir.as_ref().join(name)).collect()
}

/// Load short and long reads from a dataset directory.
pub fn read_dataset<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    info!("Loading reads from dataset {}", dir.display());
    read_fasta_files(&dataset_paths(dir))
}

impl FastaWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        if path.extension().map_or(false, |ext| ext == "gz") {
            let encoder = GzEncoder::new(file, Compression::default());
            Ok(FastaWriter::Compressed(BufWriter::new(encoder)))
        } else {
            Ok(FastaWriter::Plain(BufWriter::new(file)))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            FastaWriter::Plain(writer) => writer,
            FastaWriter::Compressed(writer) => writer,
        }
    }

    pub fn write_record(&mut self, header: &str, sequence: &str) -> io::Result<()> {
        let writer = self.writer();
        writeln!(writer, ">{}", header)?;
        writeln!(writer, "{}", sequence)
    }

    /// Writes `>contig_<id>` followed by the sequence on one line
    pub fn write_contig(&mut self, contig: &Contig) -> io::Result<()> {
        self.write_record(&format!("contig_{}", contig.id), &contig.sequence)
    }

    /// Flush buffered output and, for gzip, write the trailer.
    pub fn finish(self) -> io::Result<()> {
        match self {
            FastaWriter::Plain(mut writer) => writer.flush(),
            FastaWriter::Compressed(writer) => {
                let encoder = writer.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?.flush()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn contig(id: usize, sequence: &str) -> Contig {
        Contig {
            id,
            sequence: sequence.into(),
            kmer_count: 0,
            mean_coverage: 0.0,
        }
    }

    #[test]
    fn test_read_fasta_joins_lines_and_uppercases() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reads.fasta");
        fs::write(&path, ">r1\nACGT\nacgt\n>r2\nTTTT\n").unwrap();

        let reads = read_fasta(&path).unwrap();
        assert_eq!(reads, vec!["ACGTACGT".to_string(), "TTTT".to_string()]);
    }

    #[test]
    fn test_read_dataset_order() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("short_1.fasta"), ">a\nAAAA\n").unwrap();
        fs::write(dir.path().join("short_2.fasta"), ">b\nCCCC\n").unwrap();
        fs::write(dir.path().join("long.fasta"), ">c\nGGGGGG\n").unwrap();

        let reads = read_dataset(dir.path()).unwrap();
        assert_eq!(reads, vec!["AAAA", "CCCC", "GGGGGG"]);
    }

    #[test]
    fn test_read_dataset_missing_file_is_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("short_1.fasta"), ">a\nAAAA\n").unwrap();
        assert!(read_dataset(dir.path()).is_err());
    }

    #[test]
    fn test_writer_round_trip_plain_and_gzip() {
        let dir = tempdir().unwrap();
        for name in ["out.fasta", "out.fasta.gz"] {
            let path = dir.path().join(name);
            let mut writer = FastaWriter::new(&path).unwrap();
            writer.write_contig(&contig(0, "ATGCA")).unwrap();
            writer.write_contig(&contig(1, "TGG")).unwrap();
            writer.finish().unwrap();

            assert_eq!(read_fasta(&path).unwrap(), vec!["ATGCA", "TGG"]);
        }

        let text = fs::read_to_string(dir.path().join("out.fasta")).unwrap();
        assert_eq!(text, ">contig_0\nATGCA\n>contig_1\nTGG\n");
    }
}
