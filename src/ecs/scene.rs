// src/ecs/scene.rs

use log::debug;

use crate::components::ComponentRecord;
use crate::ecs::component::Component;
use crate::ecs::entity::{Entity, EntityAllocator};
use crate::ecs::system::{System, SystemId, SystemScheduler};
use crate::ecs::world::World;

/// Scene（シーン）は、エンティティ・コンポーネント・システムをまとめて持つ入れ物だよ！
///
/// 外から触る窓口は全部ここ。エンティティとコンポーネントの中身は `World` に、
/// システムの一覧は `SystemScheduler` に任せてる。
/// 二つを別々のフィールドにしてるのは、`update` でスケジューラーを回しながら
/// システムに `&mut World` を渡すため。
#[derive(Default)]
pub struct Scene {
    world: World,
    scheduler: SystemScheduler,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// ID の払い出し係を指定して Scene を作る。
    pub fn with_allocator(allocator: EntityAllocator) -> Self {
        Scene {
            world: World::with_allocator(allocator),
            scheduler: SystemScheduler::new(),
        }
    }

    // --- エンティティ ---

    pub fn create_entity(&mut self) -> Entity {
        self.world.create_entity()
    }

    /// エンティティと、それに紐づく全部のコンポーネントを消す。居なければ何もしない。
    pub fn remove_entity(&mut self, entity: Entity) {
        self.world.remove_entity(entity);
    }

    /// 生きてるエンティティのスナップショット (昇順)。
    pub fn get_entities(&self) -> Vec<Entity> {
        self.world.get_entities()
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.world.is_alive(entity)
    }

    pub fn entity_count(&self) -> usize {
        self.world.entity_count()
    }

    // --- コンポーネント ---

    /// コンポーネントを登録する。同じエンティティ・同じ型のがあれば上書き。
    /// エンティティが生きてるかはチェックしないよ。
    pub fn register_component<T: Component>(&mut self, component: T) {
        self.world.register_component(component);
    }

    /// JS 側から来たタグ付きのコンポーネントを登録する。
    pub fn register_record(&mut self, record: ComponentRecord) {
        match record {
            ComponentRecord::Transform(transform) => self.register_component(transform),
            ComponentRecord::Velocity(velocity) => self.register_component(velocity),
            ComponentRecord::Sprite(sprite) => self.register_component(sprite),
        }
    }

    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.world.get_component(entity)
    }

    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.world.get_component_mut(entity)
    }

    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.world.has_component::<T>(entity)
    }

    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.world.remove_component(entity)
    }

    pub fn get_components<T: Component>(&self) -> Vec<&T> {
        self.world.get_components()
    }

    pub fn components_mut<T: Component>(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.world.components_mut()
    }

    // --- システム ---

    /// システムを追加する。この中で `on_init` が呼ばれるよ。
    pub fn add_system<S: System + 'static>(&mut self, system: S) -> SystemId {
        self.add_boxed_system(Box::new(system))
    }

    pub fn add_boxed_system(&mut self, system: Box<dyn System>) -> SystemId {
        self.scheduler.add(system, &mut self.world)
    }

    /// システムを外す (`on_destroy` が呼ばれる)。知らない ID なら何もしない。
    pub fn remove_system(&mut self, id: SystemId) -> Option<Box<dyn System>> {
        self.scheduler.remove(id, &mut self.world)
    }

    pub fn system_count(&self) -> usize {
        self.scheduler.len()
    }

    /// 1 フレーム進める。全部のシステムを登録順に一回ずつ回すよ。
    /// `delta_time` は呼び出し側が計った経過秒数。
    pub fn update(&mut self, delta_time: f64) {
        self.scheduler.update(&mut self.world, delta_time);
    }

    /// エンティティ・コンポーネント・システムを全部片付ける。
    /// システムの `on_destroy` はストアを捨てる前に呼ぶので、後片付けでまだ中身を見られる。
    pub fn clear(&mut self) {
        self.scheduler.clear(&mut self.world);
        self.world.clear();
        debug!("Scene: Cleared");
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
