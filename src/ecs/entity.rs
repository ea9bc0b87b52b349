// src/ecs/entity.rs

// Entity の ID を JSON にしたり (JS 側とのやりとり) するのに serde を使うよ！
use serde::{Deserialize, Serialize};
// AtomicUsize なら &self のままでも安全にカウンターを進められる！
use std::sync::atomic::{AtomicUsize, Ordering};

/// Entity（エンティティ）は、シーンに登場する「モノ」を表すただの識別子（ID）だよ！
///
/// ID それ自体はデータを持たない。Transform とか Sprite みたいなコンポーネントを
/// この ID に紐づけることで、はじめて「(10, 20) にある赤い四角」みたいな意味が出てくるんだ。
#[derive(
    PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize,
)]
pub struct Entity(pub usize);

impl Entity {
    /// 中身の ID (usize) を取り出すよ。JS に返すときに使う。
    pub fn id(self) -> usize {
        self.0
    }
}

impl From<usize> for Entity {
    fn from(id: usize) -> Self {
        Entity(id)
    }
}

/// EntityAllocator は、エンティティ ID を 0, 1, 2, ... の順に払い出す係だよ。
///
/// プロセス全体で一個のカウンターを共有するんじゃなくて、Scene ごとに一個持つ。
/// だから別の Scene や別のテストと ID がぶつかる心配はないよ！
/// 削除された ID の再利用はしない。`reset` しない限り、同じ ID は二度と出てこない。
#[derive(Debug, Default)]
pub struct EntityAllocator {
    next_id: AtomicUsize,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しい一意なエンティティ ID を作って返すよ！
    /// それまでに払い出したどの ID よりも大きい値になる。
    pub fn create(&self) -> Entity {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        Entity(id)
    }

    /// 次に払い出す ID を 0 に戻す。
    ///
    /// **注意:** 前の世代のエンティティがまだ生きてる状態で呼ぶと ID が衝突する！
    /// テストの区切りみたいに、何も残ってないタイミングでだけ使ってね。
    pub fn reset(&self) {
        self.next_id.store(0, Ordering::Relaxed);
    }

    /// 次に払い出される予定の ID を覗き見る (カウンターは進めない)。
    pub fn peek_next(&self) -> usize {
        self.next_id.load(Ordering::Relaxed)
    }
}
