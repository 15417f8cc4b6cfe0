use std::collections::HashSet;
use next_pieces::core::generator::PieceGenerator;
use next_pieces::core::piece::PieceKind;

#[test]
fn test_ids_start_at_zero_and_increase() {
    let mut generator = PieceGenerator::seeded(1);
    assert_eq!(generator.peek_next_id(), 0);
    let ids: Vec<u64> = (0..100).map(|_| generator.generate().id()).collect();
    assert_eq!(ids, (0..100).collect::<Vec<u64>>());
    assert_eq!(generator.generated(), 100);
    assert_eq!(generator.peek_next_id(), 100);
}

#[test]
fn test_same_seed_same_kinds() {
    let mut a = PieceGenerator::seeded(42);
    let mut b = PieceGenerator::seeded(42);
    for _ in 0..50 {
        assert_eq!(a.generate(), b.generate());
    }
}

#[test]
fn test_every_kind_is_drawn() {
    let mut generator = PieceGenerator::seeded(3);
    let kinds: HashSet<PieceKind> = (0..200).map(|_| generator.generate().kind()).collect();
    assert_eq!(kinds.len(), PieceKind::ALL.len());
}

#[test]
fn test_piece_display() {
    let mut generator = PieceGenerator::seeded(9);
    let piece = generator.generate();
    assert_eq!(piece.to_string(), format!("[{} 0]", piece.kind().symbol()));
}
