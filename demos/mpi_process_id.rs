// Label a per-rank mesh piece with the MPI rank and print a summary.
// Run with e.g. `mpirun -n 4 cargo run --example mpi_process_id --features mpi-support`.
fn main() {
    use mesh_piece_scalars::prelude::*;
    use mpi::traits::*;

    let Some(universe) = mpi::initialize() else {
        eprintln!("MPI already initialized");
        return;
    };
    let world = universe.world();
    let comm = MpiComm::new(&universe);

    // Each rank owns a strip whose length depends on its rank.
    let mut piece = UnstructuredPiece::new();
    let n = comm.rank() + 2;
    for i in 0..n {
        piece.add_point([i as f64, comm.rank() as f64, 0.0]);
    }
    for i in 0..n - 1 {
        if let Err(e) = piece.add_cell(CellType::Segment, vec![i, i + 1]) {
            eprintln!("rank {}: {e}", comm.rank());
            return;
        }
    }

    let filter = ProcessIdScalars::new(ProcessIdScalarsConfig::cell_data());
    match filter.execute(&UpdateRequest::unspecified(), Some(&comm), &mut piece) {
        Ok(id) => println!(
            "rank {}/{} labelled {} cells with {}",
            comm.rank(),
            comm.size(),
            piece.number_of_cells(),
            id
        ),
        Err(e) => eprintln!("rank {}: {e}", comm.rank()),
    }
    world.barrier();
}
