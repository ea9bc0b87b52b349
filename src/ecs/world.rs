// src/ecs/world.rs

// Any / TypeId: コンポーネントの型ごとにストアを分けて、型を隠したまま一つの HashMap に入れるため。
use std::any::{type_name, Any, TypeId};
use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use log::{debug, error, trace};

use crate::ecs::component::{Component, ComponentStore};
use crate::ecs::entity::{Entity, EntityAllocator};

/// 型を隠したコンポーネントストアと、その型専用のお掃除関数をセットにしたもの。
///
/// `remove_entity` は中身の型 `T` を知らないけど、`remover` を呼べば
/// 型ごとの `ComponentStore<T>::remove` を安全に実行できるんだ！🧹
struct ComponentStoreEntry {
    /// 中身は `ComponentStore<T>`。
    storage: Box<dyn Any>,
    remover: fn(&mut Box<dyn Any>, Entity),
    /// ログ用の型名。
    type_name: &'static str,
}

impl ComponentStoreEntry {
    fn new<T: Component>() -> Self {
        ComponentStoreEntry {
            storage: Box::new(ComponentStore::<T>::new()),
            remover: remove_from_store::<T>,
            type_name: type_name::<T>(),
        }
    }
}

/// `ComponentStoreEntry::remover` の中身。型 `T` ごとに一個ずつ関数ポインタになる。
fn remove_from_store<T: Component>(storage: &mut Box<dyn Any>, entity: Entity) {
    match storage.downcast_mut::<ComponentStore<T>>() {
        Some(store) => {
            store.remove(entity);
        }
        None => error!(
            "World: storage for {} has an unexpected type; entity {} was not removed from it",
            type_name::<T>(),
            entity.0
        ),
    }
}

/// 生きているエンティティの集合と、型ごとのコンポーネントストアを持つ構造体だよ。
///
/// Scene の「問い合わせ窓口」の中身はここ。システムは毎フレーム `&mut World` を受け取って、
/// ここからコンポーネントを読んだり書き換えたりする。
/// ストアは `register_component` で初めてその型が使われたときに自動で作られるよ。
pub struct World {
    entities: HashSet<Entity>,
    allocator: EntityAllocator,
    component_stores: HashMap<TypeId, ComponentStoreEntry>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self::with_allocator(EntityAllocator::new())
    }

    /// ID の払い出し係を外から渡して World を作る。
    pub fn with_allocator(allocator: EntityAllocator) -> Self {
        World {
            entities: HashSet::new(),
            allocator,
            component_stores: HashMap::new(),
        }
    }

    /// 新しいエンティティを作って生存リストに入れるよ。
    pub fn create_entity(&mut self) -> Entity {
        let entity = self.allocator.create();
        self.entities.insert(entity);
        trace!("World: Created entity {}", entity.0);
        entity
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    /// エンティティを消す。✨超重要メソッド✨
    ///
    /// 生存リストから外すだけじゃなくて、**全部のストア** からそのエンティティの
    /// コンポーネントを消してから戻るよ。戻った時点でゴミは残ってない！
    /// もう居ないエンティティを渡しても何も起きない (冪等)。
    ///
    /// # 戻り値
    /// 生存リストに居たなら `true`。
    pub fn remove_entity(&mut self, entity: Entity) -> bool {
        let was_alive = self.entities.remove(&entity);
        // 生存リストに居なくても、孤立したコンポーネントが残ってるかもしれないので全部回る
        for entry in self.component_stores.values_mut() {
            (entry.remover)(&mut entry.storage, entity);
        }
        if was_alive {
            trace!("World: Removed entity {}", entity.0);
        }
        was_alive
    }

    /// 現在生きてるエンティティの一覧 (ID の昇順スナップショット)。
    pub fn get_entities(&self) -> Vec<Entity> {
        self.entities.iter().copied().sorted().collect()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// コンポーネントを登録するよ。その型のストアがなければここで作る。
    ///
    /// `component.entity()` が生きてるかどうかはチェックしない！
    /// 生存管理と切り離しておくためで、居ないエンティティ宛てのコンポーネントもそのまま入る。
    pub fn register_component<T: Component>(&mut self, component: T) {
        let entity = component.entity();
        if !self.is_alive(entity) {
            debug!(
                "World: Storing {} for entity {} which is not alive",
                type_name::<T>(),
                entity.0
            );
        }
        match self.store_or_insert::<T>() {
            Some(store) => store.set(component),
            None => error!(
                "World: storage for {} has an unexpected type; component was dropped",
                type_name::<T>()
            ),
        }
    }

    /// その型のストアがない場合も、エンティティが持ってない場合も `None`。
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.store::<T>().and_then(|store| store.get(entity))
    }

    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.store_mut::<T>().and_then(|store| store.get_mut(entity))
    }

    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.store::<T>().map_or(false, |store| store.has(entity))
    }

    /// ストアがなければ何もしないで `None`。
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.store_mut::<T>().and_then(|store| store.remove(entity))
    }

    /// その型のコンポーネントを全部返す。ストアがなければ空の Vec。
    pub fn get_components<T: Component>(&self) -> Vec<&T> {
        self.store::<T>().map(|store| store.get_all()).unwrap_or_default()
    }

    /// その型のコンポーネントを全部、書き換え可能な参照で回すイテレーター。
    pub fn components_mut<T: Component>(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.store_mut::<T>()
            .into_iter()
            .flat_map(|store| store.iter_mut().map(|(_, component)| component))
    }

    /// その型のコンポーネントを持ってるエンティティの一覧 (昇順)。
    pub fn entities_with<T: Component>(&self) -> Vec<Entity> {
        self.store::<T>()
            .map(|store| store.iter().map(|(entity, _)| *entity).sorted().collect())
            .unwrap_or_default()
    }

    pub fn store<T: Component>(&self) -> Option<&ComponentStore<T>> {
        self.component_stores
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.storage.downcast_ref::<ComponentStore<T>>())
    }

    pub fn store_mut<T: Component>(&mut self) -> Option<&mut ComponentStore<T>> {
        self.component_stores
            .get_mut(&TypeId::of::<T>())
            .and_then(|entry| entry.storage.downcast_mut::<ComponentStore<T>>())
    }

    fn store_or_insert<T: Component>(&mut self) -> Option<&mut ComponentStore<T>> {
        let entry = self
            .component_stores
            .entry(TypeId::of::<T>())
            .or_insert_with(|| {
                debug!("World: Created component store for {}", type_name::<T>());
                ComponentStoreEntry::new::<T>()
            });
        entry.storage.downcast_mut::<ComponentStore<T>>()
    }

    /// 今あるストアの型名一覧 (デバッグ用)。
    pub fn component_type_names(&self) -> Vec<&'static str> {
        self.component_stores
            .values()
            .map(|entry| entry.type_name)
            .sorted()
            .collect()
    }

    /// 生存リストを空にして、ストアも全部捨てる。ID カウンターはそのまま (再利用しない)。
    pub fn clear(&mut self) {
        self.entities.clear();
        self.component_stores.clear();
    }

    /// ID カウンターを 0 に戻す。テストの区切り専用！
    /// 生きてるエンティティが残ってる状態で呼ぶと ID が衝突するよ。
    pub fn reset_entity_ids(&mut self) {
        self.allocator.reset();
    }
}

#[cfg(test)]
#[path = "world_tests.rs"]
mod tests;
