#![allow(dead_code)]
use mesh_piece_scalars::{
    data::data_array::DataArray,
    data::dataset::{CellType, DataSet, UnstructuredPiece},
    filter::identity::PieceId,
};

pub fn pid(u: u32) -> PieceId {
    PieceId::new(u).unwrap()
}

/// `n` points along the x axis, no cells.
pub fn points_only(n: usize) -> UnstructuredPiece {
    UnstructuredPiece::from_points((0..n).map(|i| [i as f64, 0.0, 0.0]).collect())
}

/// A strip of `n` triangles over `n + 2` points.
pub fn triangle_strip(n: usize) -> UnstructuredPiece {
    let mut piece = points_only(n + 2);
    for i in 0..n {
        piece
            .add_cell(CellType::Triangle, vec![i, i + 1, i + 2])
            .unwrap();
    }
    piece
}

/// Piece with unrelated point and cell arrays already attached.
pub fn decorated_strip(n: usize) -> UnstructuredPiece {
    let mut piece = triangle_strip(n);
    let np = piece.number_of_points();
    let nc = piece.number_of_cells();
    piece
        .point_data_mut()
        .set_array("Temperature", DataArray::F64((0..np).map(|i| i as f64 * 0.5).collect()));
    piece
        .point_data_mut()
        .set_array("GlobalIds", DataArray::I64((0..np as i64).collect()));
    piece
        .cell_data_mut()
        .set_array("Material", DataArray::I32(vec![7; nc]));
    piece.point_data_mut().set_active_scalars("Temperature").unwrap();
    piece.cell_data_mut().set_active_scalars("Material").unwrap();
    piece
}
