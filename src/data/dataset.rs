//! Host dataset interface and a minimal in-memory piece.
//!
//! The labelling filter only needs element counts and the two field-data
//! collections, so any mesh container can take part by implementing
//! [`DataSet`]. [`UnstructuredPiece`] is the concrete piece used by the
//! streaming driver and the tests.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::field_data::FieldData;
use crate::debug_invariants::{DebugInvariants, check_tuple_count};
use crate::mesh_error::PieceScalarsError;

/// Which elements an array is attached to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum FieldAssociation {
    /// One value per point (vertex).
    Points,
    /// One value per cell (element).
    Cells,
}

impl FieldAssociation {
    /// Returns a stable string label for the association.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldAssociation::Points => "point",
            FieldAssociation::Cells => "cell",
        }
    }
}

impl fmt::Display for FieldAssociation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element counts and field data of one dataset piece.
pub trait DataSet {
    /// Number of points in the piece.
    fn number_of_points(&self) -> usize;
    /// Number of cells in the piece.
    fn number_of_cells(&self) -> usize;
    /// Point-associated arrays.
    fn point_data(&self) -> &FieldData;
    /// Mutable point-associated arrays.
    fn point_data_mut(&mut self) -> &mut FieldData;
    /// Cell-associated arrays.
    fn cell_data(&self) -> &FieldData;
    /// Mutable cell-associated arrays.
    fn cell_data_mut(&mut self) -> &mut FieldData;

    /// Number of elements carrying `association` data.
    fn number_of_elements(&self, association: FieldAssociation) -> usize {
        match association {
            FieldAssociation::Points => self.number_of_points(),
            FieldAssociation::Cells => self.number_of_cells(),
        }
    }

    /// Field data for `association`.
    fn field_data(&self, association: FieldAssociation) -> &FieldData {
        match association {
            FieldAssociation::Points => self.point_data(),
            FieldAssociation::Cells => self.cell_data(),
        }
    }

    /// Mutable field data for `association`.
    fn field_data_mut(&mut self, association: FieldAssociation) -> &mut FieldData {
        match association {
            FieldAssociation::Points => self.point_data_mut(),
            FieldAssociation::Cells => self.cell_data_mut(),
        }
    }
}

/// Common cell types for mesh elements.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum CellType {
    /// 0D vertex.
    #[default]
    Vertex,
    /// 1D segment/edge.
    Segment,
    /// 2D simplex (triangle).
    Triangle,
    /// 2D tensor-product cell (quad).
    Quadrilateral,
    /// 3D simplex (tet).
    Tetrahedron,
    /// 3D tensor-product cell (hex).
    Hexahedron,
}

impl CellType {
    /// Number of corner points, as stored in connectivity.
    pub fn num_vertices(self) -> usize {
        match self {
            CellType::Vertex => 1,
            CellType::Segment => 2,
            CellType::Triangle => 3,
            CellType::Quadrilateral | CellType::Tetrahedron => 4,
            CellType::Hexahedron => 8,
        }
    }
}

/// A cell of an unstructured piece: its type and point indices.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// Shape of the cell.
    pub cell_type: CellType,
    /// Indices into the piece's point list.
    pub connectivity: Vec<usize>,
}

/// Unstructured mesh fragment owned by one worker.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnstructuredPiece {
    points: Vec<[f64; 3]>,
    cells: Vec<Cell>,
    point_data: FieldData,
    cell_data: FieldData,
}

impl UnstructuredPiece {
    /// Creates an empty piece.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a piece from point coordinates only (no cells).
    pub fn from_points(points: Vec<[f64; 3]>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    /// Appends a point and returns its index.
    pub fn add_point(&mut self, xyz: [f64; 3]) -> usize {
        self.points.push(xyz);
        self.points.len() - 1
    }

    /// Appends a cell and returns its index.
    ///
    /// Every connectivity entry must reference an existing point.
    pub fn add_cell(
        &mut self,
        cell_type: CellType,
        connectivity: Vec<usize>,
    ) -> Result<usize, PieceScalarsError> {
        let cell = self.cells.len();
        if let Some(&point) = connectivity.iter().find(|&&p| p >= self.points.len()) {
            return Err(PieceScalarsError::CellConnectivityOutOfRange {
                cell,
                point,
                num_points: self.points.len(),
            });
        }
        self.cells.push(Cell {
            cell_type,
            connectivity,
        });
        Ok(cell)
    }

    /// Point coordinates.
    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    /// Cells in insertion order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl DataSet for UnstructuredPiece {
    fn number_of_points(&self) -> usize {
        self.points.len()
    }

    fn number_of_cells(&self) -> usize {
        self.cells.len()
    }

    fn point_data(&self) -> &FieldData {
        &self.point_data
    }

    fn point_data_mut(&mut self) -> &mut FieldData {
        &mut self.point_data
    }

    fn cell_data(&self) -> &FieldData {
        &self.cell_data
    }

    fn cell_data_mut(&mut self) -> &mut FieldData {
        &mut self.cell_data
    }
}

impl DebugInvariants for UnstructuredPiece {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "UnstructuredPiece");
    }

    fn validate_invariants(&self) -> Result<(), PieceScalarsError> {
        for (cell, c) in self.cells.iter().enumerate() {
            if let Some(&point) = c.connectivity.iter().find(|&&p| p >= self.points.len()) {
                return Err(PieceScalarsError::CellConnectivityOutOfRange {
                    cell,
                    point,
                    num_points: self.points.len(),
                });
            }
        }
        for association in [FieldAssociation::Points, FieldAssociation::Cells] {
            let expected = self.number_of_elements(association);
            let fd = self.field_data(association);
            for (name, array) in fd.iter() {
                check_tuple_count(association, name, expected, array.len())?;
            }
            fd.validate_invariants()?;
        }
        Ok(())
    }
}
