use crate::boards::MailboxBoard;
use crate::search::AlphaBetaSearch;
use crate::utils::random_u64;
use lazy_static::lazy_static;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::cell::RefCell;

/// Lookup table for previously scored board positions, keyed by a board
/// signature. Implemented with Zobrist hashing.
/// Further reading:
///   - <https://en.wikipedia.org/wiki/Zobrist_hashing>
///   - <https://en.wikipedia.org/wiki/Transposition_table>
///
/// This is a purely additive optimization: the search is correct without
/// it, and caching leaf evaluations can never change which move gets
/// picked (up to the usual Zobrist assumption that 64-bit signatures of
/// positions actually reached in one game do not collide).

type ZobristHash = u64;
type ZobristPieceTable = [[ZobristHash; 12]; 64];

// Seeded so that signatures are stable across runs
const ZOBRIST_SEED: u64 = 42;

lazy_static! {
    static ref ZOBRIST_PIECE_TABLE: Box<ZobristPieceTable> = Box::new(zobrist_piece_table());
}

fn zobrist_piece_table() -> ZobristPieceTable {
    let r = &mut SmallRng::seed_from_u64(ZOBRIST_SEED);
    let mut res: ZobristPieceTable = [[0; 12]; 64];
    for square in res.iter_mut() {
        for entry in square.iter_mut() {
            *entry = random_u64(r);
        }
    }
    res
}

pub trait ZobristHashable {
    fn zhash(&self) -> ZobristHash;
}

/// The signature only looks at kind and color per square, not at instance
/// ids: two boards that differ only in which of the eight pawns stands
/// somewhere are the same position.
impl ZobristHashable for MailboxBoard {
    fn zhash(&self) -> ZobristHash {
        let mut h = 0u64;
        for (pos, piece) in self.occupied() {
            h ^= ZOBRIST_PIECE_TABLE[pos.index()][piece.type_index()];
        }
        h
    }
}

/// Direct-mapped cache over trimmed Zobrist hashes. B is the number of
/// hash bits used for indexing, so the table holds 2^B slots; the full
/// hash is stored alongside each entry to weed out index collisions.
pub struct TranspositionCache<I, const B: u8> {
    slots: Vec<Option<(ZobristHash, I)>>,
}

impl<I: Clone, const B: u8> TranspositionCache<I, B> {
    pub fn new() -> TranspositionCache<I, B> {
        TranspositionCache {
            slots: vec![None; 1 << B],
        }
    }

    const HASH_MASK: u64 = u64::MAX >> (64 - B);

    fn slot_index(h: ZobristHash) -> usize {
        (h & Self::HASH_MASK) as usize
    }

    /// Stores an item, evicting whatever occupied the slot before.
    pub fn add<H: ZobristHashable>(&mut self, index: &H, item: I) {
        let full_hash = index.zhash();
        self.slots[Self::slot_index(full_hash)] = Some((full_hash, item));
    }

    pub fn retrieve<H: ZobristHashable>(&self, index: &H) -> Option<&I> {
        let (stored_hash, item) = self.slots[Self::slot_index(index.zhash())].as_ref()?;
        if *stored_hash == index.zhash() {
            Some(item)
        } else {
            None
        }
    }
}

// 2^16 slots of (u64, i32) is less than 2 MB
const EVAL_CACHE_BITS: u8 = 16;

/// Wraps any search evaluator and memoizes its leaf scores by board
/// signature. Since the leaf heuristic is a pure function of the board,
/// reusing a cached score gives bit-identical search results.
pub struct CachingEvaluator<E> {
    inner: E,
    cache: RefCell<TranspositionCache<i32, { EVAL_CACHE_BITS }>>,
}

impl<E: AlphaBetaSearch> CachingEvaluator<E> {
    pub fn new(inner: E) -> CachingEvaluator<E> {
        CachingEvaluator {
            inner,
            cache: RefCell::new(TranspositionCache::new()),
        }
    }
}

impl<E: AlphaBetaSearch> AlphaBetaSearch for CachingEvaluator<E> {
    fn score(&self, board: &MailboxBoard) -> i32 {
        if let Some(&cached) = self.cache.borrow().retrieve(board) {
            return cached;
        }
        let fresh = self.inner.score(board);
        self.cache.borrow_mut().add(board, fresh);
        fresh
    }
}
