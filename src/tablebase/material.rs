use shakmaty::{Board, Color, Role};

/*----------------------------------------------------------------*/

/// Per-piece contributions to a [`MaterialId`]. Upper case is white, lower case is black.
#[allow(non_upper_case_globals)]
pub mod weights {
    pub const P: u64 = 1;
    pub const N: u64 = 9;
    pub const B: u64 = N * 11;
    pub const R: u64 = B * 11;
    pub const Q: u64 = R * 11;

    pub const p: u64 = P << 32;
    pub const n: u64 = N << 32;
    pub const b: u64 = B << 32;
    pub const r: u64 = R << 32;
    pub const q: u64 = Q << 32;
}

/// Non-king roles in the order used by [`Composition`].
pub const MATERIAL_ROLES: [Role; 5] = [Role::Pawn, Role::Knight, Role::Bishop, Role::Rook, Role::Queen];

/// Roles a pawn can promote to.
pub const PROMOTION_ROLES: [Role; 4] = [Role::Queen, Role::Rook, Role::Bishop, Role::Knight];

#[inline]
const fn color_index(color: Color) -> usize {
    match color {
        Color::White => 0,
        Color::Black => 1,
    }
}

#[inline]
const fn role_index(role: Role) -> Option<usize> {
    match role {
        Role::Pawn => Some(0),
        Role::Knight => Some(1),
        Role::Bishop => Some(2),
        Role::Rook => Some(3),
        Role::Queen => Some(4),
        Role::King => None,
    }
}

/*----------------------------------------------------------------*/

/// Integer key of a piece-count composition, kings excluded.
///
/// White counts live in the low 32 bits and black counts in the high 32 bits,
/// so swapping colors is a rotation by 32.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaterialId(pub u64);

impl MaterialId {
    pub const EMPTY: MaterialId = MaterialId(0);

    #[inline]
    pub const fn weight(color: Color, role: Role) -> u64 {
        let white = match role {
            Role::Pawn => weights::P,
            Role::Knight => weights::N,
            Role::Bishop => weights::B,
            Role::Rook => weights::R,
            Role::Queen => weights::Q,
            Role::King => 0,
        };

        match color {
            Color::White => white,
            Color::Black => white << 32,
        }
    }

    #[inline]
    pub const fn mirror(self) -> MaterialId {
        MaterialId(self.0.rotate_left(32))
    }

    /// The smaller of the id and its mirror, used as the key for color-symmetric caches.
    #[inline]
    pub fn canonical(self) -> MaterialId {
        self.min(self.mirror())
    }
}

/*----------------------------------------------------------------*/

/// Immutable piece counts per color and role, kings excluded.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Composition([[u8; 5]; 2]);

impl Composition {
    pub const EMPTY: Composition = Composition([[0; 5]; 2]);

    pub fn from_board(board: &Board) -> Composition {
        let mut counts = [[0; 5]; 2];

        for color in [Color::White, Color::Black] {
            for (i, &role) in MATERIAL_ROLES.iter().enumerate() {
                counts[color_index(color)][i] = (board.by_color(color) & board.by_role(role)).count() as u8;
            }
        }

        Composition(counts)
    }

    #[inline]
    pub fn count(&self, color: Color, role: Role) -> u8 {
        role_index(role).map_or(0, |i| self.0[color_index(color)][i])
    }

    #[inline]
    pub fn pawns(&self) -> u32 {
        self.count(Color::White, Role::Pawn) as u32 + self.count(Color::Black, Role::Pawn) as u32
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.0.iter().flatten().map(|&c| c as u32).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every `(color, role)` with at least one piece on the board.
    pub fn present(&self) -> impl Iterator<Item = (Color, Role)> + '_ {
        [Color::White, Color::Black]
            .into_iter()
            .flat_map(|color| MATERIAL_ROLES.into_iter().map(move |role| (color, role)))
            .filter(|&(color, role)| self.count(color, role) > 0)
    }

    /*----------------------------------------------------------------*/

    #[must_use]
    pub fn with_added(self, color: Color, role: Role) -> Composition {
        let mut counts = self.0;

        if let Some(i) = role_index(role) {
            counts[color_index(color)][i] += 1;
        }

        Composition(counts)
    }

    #[must_use]
    pub fn with_removed(self, color: Color, role: Role) -> Composition {
        let mut counts = self.0;

        if let Some(i) = role_index(role) {
            let count = &mut counts[color_index(color)][i];
            *count = count.saturating_sub(1);
        }

        Composition(counts)
    }

    #[must_use]
    pub fn with_promotion(self, color: Color, role: Role) -> Composition {
        self.with_removed(color, Role::Pawn).with_added(color, role)
    }

    #[must_use]
    pub fn mirror(self) -> Composition {
        Composition([self.0[1], self.0[0]])
    }

    pub fn id(&self) -> MaterialId {
        let mut id = 0;

        for color in [Color::White, Color::Black] {
            for role in MATERIAL_ROLES {
                id += self.count(color, role) as u64 * MaterialId::weight(color, role);
            }
        }

        MaterialId(id)
    }
}

/*----------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use shakmaty::{fen::Fen, CastlingMode, Chess, Position};
    use super::*;

    fn board(fen: &str) -> Board {
        let pos: Chess = fen.parse::<Fen>().unwrap().into_position(CastlingMode::Standard).unwrap();
        pos.board().clone()
    }

    #[test]
    fn test_weights() {
        use weights::*;

        assert_eq!(MaterialId::weight(Color::White, Role::Rook), R);
        assert_eq!(MaterialId::weight(Color::Black, Role::Knight), n);
        assert_eq!(MaterialId::weight(Color::Black, Role::King), 0);
        assert_eq!(MaterialId(Q + r).mirror(), MaterialId(q + R));
    }

    #[test]
    fn test_mirror() {
        let comp = Composition::from_board(&board("4k3/pp6/8/8/8/8/3R4/1N2K1Q1 w - - 0 1"));

        assert_eq!(comp.count(Color::White, Role::Rook), 1);
        assert_eq!(comp.count(Color::Black, Role::Pawn), 2);
        assert_eq!(comp.len(), 5);
        assert_eq!(comp.mirror().id(), comp.id().mirror());
        assert_eq!(comp.id().mirror().mirror(), comp.id());
        assert_eq!(comp.id().canonical(), comp.mirror().id().canonical());
    }

    #[test]
    fn test_unique_ids() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        let mut stack = vec![Composition::EMPTY];

        while let Some(comp) = stack.pop() {
            if !seen.insert(comp) {
                continue;
            }

            if comp.len() < 4 {
                for color in [Color::White, Color::Black] {
                    for role in MATERIAL_ROLES {
                        stack.push(comp.with_added(color, role));
                    }
                }
            }
        }

        let ids = seen.iter().map(Composition::id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), seen.len());
    }

    #[test]
    fn test_promotion() {
        let comp = Composition::EMPTY
            .with_added(Color::White, Role::Pawn)
            .with_added(Color::Black, Role::Rook);
        let promoted = comp.with_promotion(Color::White, Role::Queen);

        assert_eq!(promoted.pawns(), 0);
        assert_eq!(promoted.id(), MaterialId(weights::Q + weights::r));
        assert_eq!(promoted.present().count(), 2);
    }
}
