use dashmap::DashMap;
use rayon::prelude::*;
use shakmaty::{Chess, Color, Role};
use crate::*;

/*----------------------------------------------------------------*/

/// Most non-king pieces covered by the prewarmed cache entries.
const PREWARM_PIECES: u32 = 5;

/// Memoized upper bounds on the plies needed to mate through every smaller sub-table.
///
/// Keys are `(canonical material id, remaining pawn advances)`. Entries are never
/// invalidated, so one cache can be shared between probers and threads.
#[derive(Debug, Default)]
pub struct SubMateCache {
    entries: DashMap<(MaterialId, u32), i32>,
}

impl SubMateCache {
    #[inline]
    pub fn new() -> SubMateCache {
        SubMateCache::default()
    }

    #[inline]
    pub fn get(&self, id: MaterialId, pawn_moves: u32) -> Option<i32> {
        self.entries.get(&(id.canonical(), pawn_moves)).map(|e| *e)
    }

    #[inline]
    pub fn put(&self, id: MaterialId, pawn_moves: u32, plies: i32) {
        self.entries.insert((id.canonical(), pawn_moves), plies);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn clear(&self) {
        self.entries.clear();
    }

    /*----------------------------------------------------------------*/

    /// Bound for the material and pawn structure of `pos`.
    pub fn max_sub_mate_for(&self, pos: &Chess) -> i32 {
        self.max_sub_mate(pos.composition(), pos.max_pawn_moves())
    }

    /// Longest mate, in plies, reachable from `comp` by pawn advances, captures and promotions
    /// when every phase between two zeroing moves takes the longest DTZ of its sub-table.
    pub fn max_sub_mate(&self, comp: Composition, pawn_moves: u32) -> i32 {
        if pawn_moves > comp.pawns() * 5 {
            return 0;
        }

        let id = comp.id();
        if let Some(plies) = self.get(id, pawn_moves) {
            return plies;
        }

        let mut max_plies = 0;

        if pawn_moves > 0 {
            max_plies = self.max_sub_mate(comp, pawn_moves - 1) + max_dtz(id);
        }

        for (color, role) in comp.present() {
            let captured = comp.with_removed(color, role);
            let cost = max_dtz(captured.id());
            // A captured pawn takes its remaining advances with it.
            let freed = if role == Role::Pawn { 5.min(pawn_moves) } else { 0 };

            for k in 0..=freed {
                max_plies = max_plies.max(self.max_sub_mate(captured, pawn_moves - k) + cost);
            }
        }

        for color in [Color::White, Color::Black] {
            if comp.count(color, Role::Pawn) == 0 {
                continue;
            }

            for role in PROMOTION_ROLES {
                let promoted = comp.with_promotion(color, role);
                max_plies = max_plies.max(self.max_sub_mate(promoted, pawn_moves) + max_dtz(promoted.id()));
            }
        }

        self.put(id, pawn_moves, max_plies);
        max_plies
    }

    /// Computes every split of five pawns between the two colors, which covers
    /// the sub-tables of all positions with up to five non-king pieces.
    pub fn prewarm(&self) {
        (0..=PREWARM_PIECES).into_par_iter().for_each(|white_pawns| {
            let mut comp = Composition::EMPTY;

            for _ in 0..white_pawns {
                comp = comp.with_added(Color::White, Role::Pawn);
            }

            for _ in white_pawns..PREWARM_PIECES {
                comp = comp.with_added(Color::Black, Role::Pawn);
            }

            self.max_sub_mate(comp, PREWARM_PIECES * 5);
        });

        log::debug!("Prewarmed sub-mate cache with {} entries", self.len());
    }
}

/*----------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use shakmaty::{fen::Fen, CastlingMode};
    use super::*;

    fn chess(fen: &str) -> Chess {
        fen.parse::<Fen>().unwrap().into_position(CastlingMode::Standard).unwrap()
    }

    fn random_composition(rng: &mut StdRng) -> Composition {
        let mut comp = Composition::EMPTY;

        for _ in 0..rng.random_range(1..=4) {
            let color = if rng.random_bool(0.5) { Color::White } else { Color::Black };
            let role = MATERIAL_ROLES[rng.random_range(0..MATERIAL_ROLES.len())];
            comp = comp.with_added(color, role);
        }

        comp
    }

    #[test]
    fn test_queen_vs_queen() {
        let cache = SubMateCache::new();
        let pos = chess("3qk3/8/8/8/8/8/8/3QK3 w - - 0 1");

        assert_eq!(cache.max_sub_mate_for(&pos), max_dtz(MaterialId(weights::Q)));
        assert_eq!(cache.max_sub_mate_for(&pos), 22);
    }

    #[test]
    fn test_bare_material() {
        let cache = SubMateCache::new();

        assert_eq!(cache.max_sub_mate(Composition::EMPTY, 0), 0);
        assert_eq!(cache.max_sub_mate(Composition::EMPTY, 3), 0);
        assert_eq!(cache.max_sub_mate(Composition::EMPTY.with_added(Color::White, Role::Bishop), 0), 0);
    }

    #[test]
    fn test_pawn_budget() {
        let cache = SubMateCache::new();
        let pawn = Composition::EMPTY.with_added(Color::White, Role::Pawn);

        let promoted = max_dtz(MaterialId(weights::Q)) + cache.max_sub_mate(
            Composition::EMPTY.with_added(Color::White, Role::Queen),
            0,
        );

        assert_eq!(cache.max_sub_mate(pawn, 6), 0);
        assert!(cache.max_sub_mate(pawn, 0) >= promoted);
        assert!(cache.max_sub_mate(pawn, 5) > cache.max_sub_mate(pawn, 4));
    }

    #[test]
    fn test_mirror_invariance() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let cache = SubMateCache::new();

        for _ in 0..64 {
            let comp = random_composition(&mut rng);
            let pawn_moves = rng.random_range(0..=comp.pawns() * 5);

            assert_eq!(
                cache.max_sub_mate(comp, pawn_moves),
                SubMateCache::new().max_sub_mate(comp.mirror(), pawn_moves),
            );
        }
    }

    #[test]
    fn test_idempotent() {
        let warm = SubMateCache::new();
        warm.prewarm();
        assert!(!warm.is_empty());

        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..64 {
            let comp = random_composition(&mut rng);
            let pawn_moves = rng.random_range(0..=comp.pawns() * 5);
            let cold = SubMateCache::new();

            assert_eq!(warm.max_sub_mate(comp, pawn_moves), cold.max_sub_mate(comp, pawn_moves));
            assert_eq!(cold.max_sub_mate(comp, pawn_moves), cold.max_sub_mate(comp, pawn_moves));
        }

        let pawns = Composition::EMPTY.with_added(Color::White, Role::Pawn).with_added(Color::Black, Role::Pawn);
        let before = warm.max_sub_mate(pawns, 10);

        warm.clear();
        assert!(warm.is_empty());
        assert_eq!(warm.max_sub_mate(pawns, 10), before);
    }
}
