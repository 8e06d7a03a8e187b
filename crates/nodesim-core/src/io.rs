//! Plain-text layout files.
//!
//! ```text
//! Nodes!
//! <node count>
//! <name>            -- two lines per node
//! <id> <x> <y>
//! <edge count>
//! <source id> <destination id> [length]
//! ```
//!
//! Edges are directed; a mutual pair is stored as two lines. The length
//! column is optional when reading (missing means 1.0) and always written.
//! Names are stored verbatim on their own line and must not contain line
//! breaks.

use std::collections::HashSet;
use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::LoadError;
use crate::geom::Point;
use crate::layout::Layout;
use crate::node::{Node, NodeId, DEFAULT_LENGTH};

const HEADER: &str = "Nodes!";

/// Write `layout` in the text format.
pub fn save(layout: &Layout, mut out: impl Write) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    writeln!(out, "{}", layout.len())?;
    let mut edges = Vec::with_capacity(layout.edge_count());
    for node in layout.nodes() {
        writeln!(out, "{}", node.name())?;
        writeln!(out, "{} {} {}", node.id(), node.x(), node.y())?;
        for c in node.outgoing_connections() {
            let dest = layout
                .node(c.destination())
                .map_or(c.destination_id(), Node::id);
            edges.push((node.id(), dest, c.length()));
        }
    }
    writeln!(out, "{}", edges.len())?;
    for (source, dest, length) in edges {
        writeln!(out, "{source} {dest} {length}")?;
    }
    out.flush()
}

/// Write `layout` to `path`, creating parent directories as needed.
pub fn save_file(layout: &Layout, path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    save(layout, BufWriter::new(fs::File::create(path)?))?;
    log::debug!("saved {} nodes to {}", layout.len(), path.display());
    Ok(())
}

/// Read a layout written by [`save`] (or the older two-column edge format).
///
/// The result has its own id counter, positioned after the largest id read.
pub fn load(input: impl BufRead) -> Result<Layout, LoadError> {
    let mut lines = Lines {
        inner: input.lines(),
        number: 0,
    };

    if lines.next_line()?.map(|l| l.trim().to_owned()).as_deref() != Some(HEADER) {
        return Err(LoadError::MissingHeader);
    }

    let mut layout = Layout::new();
    let mut seen_ids = HashSet::new();
    let node_count: usize = lines.parse_one("node count")?;
    for _ in 0..node_count {
        let name = lines.expect_line("node name")?;
        let line = lines.expect_line("node parameters")?;
        let mut fields = line.split_whitespace();
        let id = NodeId(lines.field(&mut fields, "node id")?);
        let x = lines.field(&mut fields, "x coordinate")?;
        let y = lines.field(&mut fields, "y coordinate")?;
        let pos = Point::new(x, y);

        if layout.contains(pos) {
            return Err(LoadError::DuplicateCoordinate {
                line: lines.number,
                pos,
            });
        }
        if !seen_ids.insert(id) {
            return Err(lines.error(format!("duplicate node id {id}")));
        }
        layout.add_node(Node::with_name(id, pos, name));
    }

    let edge_count: usize = lines.parse_one("edge count")?;
    for _ in 0..edge_count {
        let line = lines.expect_line("edge")?;
        let mut fields = line.split_whitespace();
        let source = NodeId(lines.field(&mut fields, "source id")?);
        let dest = NodeId(lines.field(&mut fields, "destination id")?);
        let length = match fields.next() {
            Some(s) => s
                .parse::<f64>()
                .map_err(|e| lines.error(format!("invalid length {s:?}: {e}")))?,
            None => DEFAULT_LENGTH,
        };
        let lookup = |id: NodeId| {
            layout.pos_of(id).map_err(|_| LoadError::UnknownId {
                line: lines.number,
                id,
            })
        };
        let (s, d) = (lookup(source)?, lookup(dest)?);
        layout.add_neighbor(s, d, false, length)?;
    }

    log::debug!(
        "loaded layout: {} nodes, {} connections",
        layout.len(),
        layout.edge_count()
    );
    Ok(layout)
}

/// Read a layout file from disk.
pub fn load_file(path: impl AsRef<Path>) -> Result<Layout, LoadError> {
    let file = fs::File::open(path.as_ref())?;
    load(BufReader::new(file))
}

/// Line reader that remembers the current 1-based line number.
struct Lines<B> {
    inner: io::Lines<B>,
    number: usize,
}

impl<B: BufRead> Lines<B> {
    fn next_line(&mut self) -> Result<Option<String>, LoadError> {
        match self.inner.next() {
            Some(line) => {
                self.number += 1;
                let mut line = line?;
                if line.ends_with('\r') {
                    line.pop();
                }
                Ok(Some(line))
            }
            None => Ok(None),
        }
    }

    fn expect_line(&mut self, what: &str) -> Result<String, LoadError> {
        match self.next_line()? {
            Some(line) => Ok(line),
            None => Err(LoadError::Parse {
                line: self.number + 1,
                message: format!("unexpected end of file, expected {what}"),
            }),
        }
    }

    fn parse_one<T>(&mut self, what: &str) -> Result<T, LoadError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let line = self.expect_line(what)?;
        let mut fields = line.split_whitespace();
        self.field(&mut fields, what)
    }

    fn field<'a, T>(
        &self,
        fields: &mut impl Iterator<Item = &'a str>,
        what: &str,
    ) -> Result<T, LoadError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = fields
            .next()
            .ok_or_else(|| self.error(format!("missing {what}")))?;
        raw.parse()
            .map_err(|e| self.error(format!("invalid {what} {raw:?}: {e}")))
    }

    fn error(&self, message: String) -> LoadError {
        LoadError::Parse {
            line: self.number,
            message,
        }
    }
}
