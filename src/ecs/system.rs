// src/ecs/system.rs

use log::debug;

use crate::ecs::world::World;

/// System（システム）トレイトだよ！
///
/// 毎フレーム一回 `update` が呼ばれて、World の中のコンポーネントを読んだり書き換えたり
/// (あるいは描画みたいな副作用を起こしたり) する。
///
/// `on_init` / `on_destroy` は実装してもしなくてもいいフック。何もしないデフォルトがあるから、
/// スケジューラーは「実装されてるか？」を気にせずそのまま呼べるんだ。
pub trait System {
    /// 毎フレーム呼ばれる。`delta_time` は前のフレームからの経過秒数。
    fn update(&mut self, world: &mut World, delta_time: f64);

    /// スケジューラーに追加された直後に一回だけ呼ばれる。
    fn on_init(&mut self, _world: &mut World) {}

    /// スケジューラーから外されるとき (remove / clear) に一回だけ呼ばれる。
    fn on_destroy(&mut self, _world: &mut World) {}

    /// ログ用の名前。
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// `|world: &mut World, dt: f64| { ... }` みたいなクロージャもそのままシステムにできるよ！
impl<F> System for F
where
    F: FnMut(&mut World, f64),
{
    fn update(&mut self, world: &mut World, delta_time: f64) {
        self(world, delta_time)
    }
}

/// 追加したシステムを後から指定するためのハンドル。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SystemId(usize);

impl SystemId {
    /// JS に渡すときの数値。
    pub fn index(self) -> usize {
        self.0
    }

    pub(crate) fn from_index(index: usize) -> Self {
        SystemId(index)
    }
}

/// 登録されたシステムを順番に持っておいて、毎フレーム順番に回す係。
///
/// 登録順 = 実行順。同じフレームで他のシステムの結果を使いたいなら、
/// 依存される側を先に登録してね。
/// システムは `&mut World` しか受け取らないから、`update` の途中でシステムの一覧が
/// 変わることはない。
#[derive(Default)]
pub struct SystemScheduler {
    systems: Vec<(SystemId, Box<dyn System>)>,
    next_id: usize,
}

impl SystemScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最後尾に追加してから `on_init` を呼ぶ。
    pub fn add(&mut self, system: Box<dyn System>, world: &mut World) -> SystemId {
        let id = SystemId(self.next_id);
        self.next_id += 1;
        debug!("SystemScheduler: Adding system {} as {:?}", system.name(), id);
        self.systems.push((id, system));
        if let Some((_, system)) = self.systems.last_mut() {
            system.on_init(world);
        }
        id
    }

    /// `on_destroy` を呼んでから外す。外したシステムを返すよ。
    /// 知らない ID なら何もしないで `None`。
    pub fn remove(&mut self, id: SystemId, world: &mut World) -> Option<Box<dyn System>> {
        let index = self.systems.iter().position(|(system_id, _)| *system_id == id)?;
        let (_, system) = &mut self.systems[index];
        debug!("SystemScheduler: Removing system {} ({:?})", system.name(), id);
        system.on_destroy(world);
        let (_, system) = self.systems.remove(index);
        Some(system)
    }

    /// 全部のシステムを登録順に一回ずつ `update` する。
    pub fn update(&mut self, world: &mut World, delta_time: f64) {
        for (_, system) in self.systems.iter_mut() {
            system.update(world, delta_time);
        }
    }

    /// 登録順に `on_destroy` を呼んでから全部外す。
    pub fn clear(&mut self, world: &mut World) {
        for (_, system) in self.systems.iter_mut() {
            system.on_destroy(world);
        }
        debug!("SystemScheduler: Cleared {} systems", self.systems.len());
        self.systems.clear();
    }

    pub fn contains(&self, id: SystemId) -> bool {
        self.systems.iter().any(|(system_id, _)| *system_id == id)
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}
