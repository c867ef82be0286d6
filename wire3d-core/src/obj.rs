/// Loader for the plain-text mesh format (`v` vertex and `f` face records)
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use nalgebra::Point3;
use nom::{
    bytes::complete::tag,
    character::complete::{i64 as signed_index, space0, space1},
    combinator::{all_consuming, opt, rest},
    number::complete::float,
    sequence::{preceded, terminated},
    IResult,
};

use crate::error::{MeshError, Result};
use crate::geometry::{EdgeRecord, Mesh, Vertex};

/// Load a mesh file, offsetting it to `origin`.
///
/// With `connect_all` set, face records are skipped and every vertex is
/// linked to every other one instead.
pub fn load_mesh(path: impl AsRef<Path>, origin: Point3<f32>, connect_all: bool) -> Result<Mesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => MeshError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => MeshError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_mesh(BufReader::new(file), &name, path, origin, connect_all)
}

/// Load a mesh from any buffered reader
pub fn load_mesh_from_reader<R: BufRead>(
    reader: R,
    name: &str,
    origin: Point3<f32>,
    connect_all: bool,
) -> Result<Mesh> {
    parse_mesh(reader, name, Path::new(name), origin, connect_all)
}

/// Convenience helper to parse mesh text held in memory.
pub fn load_mesh_from_str(
    contents: &str,
    name: &str,
    origin: Point3<f32>,
    connect_all: bool,
) -> Result<Mesh> {
    load_mesh_from_reader(io::Cursor::new(contents), name, origin, connect_all)
}

fn parse_mesh<R: BufRead>(
    reader: R,
    name: &str,
    source_path: &Path,
    origin: Point3<f32>,
    connect_all: bool,
) -> Result<Mesh> {
    let mut vertices: Vec<Vertex> = Vec::new();
    let mut edges: Vec<EdgeRecord> = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| MeshError::Io {
            path: source_path.to_path_buf(),
            source,
        })?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        let line_no = line_no + 1;

        if line.starts_with('#') {
            continue;
        }

        if let Some(fields) = line.strip_prefix("v ") {
            vertices.push(parse_vertex(fields, line_no, line)?);
        } else if let Some(fields) = line.strip_prefix("f ") {
            if !connect_all {
                edges.push(parse_face(fields, line_no)?);
            }
        }
        // Anything else (vt/vn/o/g/blank) is not part of the wireframe
    }

    if connect_all {
        edges = connect_all_edges(vertices.len());
    }

    let mesh = Mesh::new(name, vertices, edges).placed_at(origin);
    log::debug!(
        "loaded mesh '{}': {} vertices, {} edges",
        mesh.name,
        mesh.vertices.len(),
        mesh.edges.len()
    );
    Ok(mesh)
}

/// Index pairs `(i, j + 1)` for `i` in `0..n-1` and `j` in `0..n`.
///
/// Pairs are not deduplicated and include self pairs; index 0 resolves to
/// the last vertex.
pub fn connect_all_edges(vertex_count: usize) -> Vec<EdgeRecord> {
    let count = vertex_count as i64;
    let rows = (count - 1).max(0);
    let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1) * vertex_count);
    for i in 0..rows {
        for j in 0..count {
            edges.push(EdgeRecord::pair(i, j + 1));
        }
    }
    edges
}

fn parse_vertex(input: &str, line_no: usize, line: &str) -> Result<Vertex> {
    match all_consuming(parse_vector3)(input) {
        Ok((_, (x, y, z))) => Ok(Point3::new(x, y, z)),
        Err(_) => Err(MeshError::MalformedVertex {
            line: line_no,
            text: line.to_string(),
        }),
    }
}

fn parse_face(input: &str, line_no: usize) -> Result<EdgeRecord> {
    input
        .split_whitespace()
        .map(|token| match all_consuming(face_index)(token) {
            Ok((_, index)) => Ok(index),
            Err(_) => Err(MeshError::MalformedFace {
                line: line_no,
                token: token.to_string(),
            }),
        })
        .collect::<Result<Vec<_>>>()
        .map(EdgeRecord::new)
}

fn parse_vector3(input: &str) -> IResult<&str, (f32, f32, f32)> {
    let (input, _) = space0(input)?;
    let (input, x) = float(input)?;
    let (input, _) = space1(input)?;
    let (input, y) = float(input)?;
    let (input, _) = space1(input)?;
    let (input, z) = float(input)?;
    let (input, _) = space0(input)?;
    Ok((input, (x, y, z)))
}

/// Vertex index of a face token; texture/normal sub-indices after `/` are ignored.
/// Signed indices are accepted here and rejected when the edge is resolved.
fn face_index(input: &str) -> IResult<&str, i64> {
    terminated(signed_index, opt(preceded(tag("/"), rest)))(input)
}
