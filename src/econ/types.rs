use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Equip slot assignment on an inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ItemEquip {
    pub class: i32,
    pub slot: i32,
}

/// One attribute attached to an inventory item. `value` is schema-defined
/// and can be a number or a string depending on the attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ItemAttribute {
    #[serde(rename = "defindex")]
    pub def_index: i32,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub float_value: f64,
}

/// An individual item from a user's in-game inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct InventoryItem {
    pub id: i64,
    pub original_id: i64,
    #[serde(rename = "defindex")]
    pub def_index: i32,
    pub level: i32,
    pub quality: i32,
    pub inventory: i64,
    pub quantity: i32,
    pub origin: i32,
    #[serde(default)]
    pub equipped: Vec<ItemEquip>,
    #[serde(default)]
    pub flag_cannot_trade: Option<bool>,
    #[serde(default)]
    pub attributes: Vec<ItemAttribute>,
    #[serde(default)]
    pub flag_cannot_craft: Option<bool>,
}

/// A user's backpack: the items plus its slot capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PlayerInventory {
    pub status: i32,
    pub num_backpack_slots: i32,
    #[serde(default)]
    pub items: Vec<InventoryItem>,
}

/// Item quality ids, keyed by quality name (`Normal`, `vintage`,
/// `strange`, ...). The key set varies per app.
pub type Qualities = std::collections::HashMap<String, i32>;

/// Human-readable name for an item origin id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct OriginName {
    pub origin: i32,
    pub name: String,
}

/// Definition of an attribute items might carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct SchemaAttribute {
    pub name: String,
    #[serde(rename = "defindex")]
    pub def_index: i32,
    pub attribute_class: String,
    #[serde(default)]
    pub description_string: Option<String>,
    #[serde(default)]
    pub description_format: Option<String>,
    pub effect_type: String,
    pub hidden: bool,
    pub stored_as_integer: bool,
}

/// A name/class/value triple used by item sets and schema items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct AttributeValue {
    pub name: String,
    pub class: String,
    #[serde(default)]
    pub value: Value,
}

/// A named collection of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ItemSet {
    pub item_set: String,
    pub name: String,
    pub items: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeValue>,
    #[serde(default)]
    pub store_bundle: Option<String>,
}

/// Particle effect that an attribute can attach to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct AttachedParticle {
    pub system: String,
    pub id: i32,
    #[serde(rename = "attach_to_rootbone")]
    pub attach_to_root_bone: bool,
    pub name: String,
    #[serde(default)]
    pub attachment: Option<String>,
}

/// One level threshold inside an [`ItemLevel`] track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct LevelRange {
    pub level: i32,
    pub required_score: i32,
    pub name: String,
}

/// A named level track for leveling items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ItemLevel {
    pub name: String,
    pub levels: Vec<LevelRange>,
}

/// Kill-eater (strange counter) score type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct KillEaterScoreType {
    #[serde(rename = "type")]
    pub score_type: i32,
    pub type_name: String,
    pub level_data: String,
}

/// One entry of a string lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct StringEntry {
    pub index: i32,
    #[serde(rename = "string")]
    pub text: String,
}

/// A named string lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct StringLookup {
    pub table_name: String,
    pub strings: Vec<StringEntry>,
}

/// Everything an item might potentially have: attributes, item sets,
/// particles, level tracks, and lookup tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct SchemaOverview {
    pub status: i32,
    pub items_game_url: String,
    #[serde(default)]
    pub qualities: Qualities,
    #[serde(rename = "originNames", default)]
    pub origin_names: Vec<OriginName>,
    #[serde(default)]
    pub attributes: Vec<SchemaAttribute>,
    #[serde(default)]
    pub item_sets: Vec<ItemSet>,
    #[serde(default)]
    pub attribute_controlled_attached_particles: Vec<AttachedParticle>,
    #[serde(default)]
    pub item_levels: Vec<ItemLevel>,
    #[serde(default)]
    pub kill_eater_score_types: Vec<KillEaterScoreType>,
    #[serde(default)]
    pub string_lookups: Vec<StringLookup>,
}

/// What an item definition is capable of.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SchemaItemCapabilities {
    pub paintable: bool,
    pub nameable: bool,
    pub can_craft_if_purchased: bool,
    pub can_gift_wrap: bool,
    pub can_craft_count: bool,
    pub can_craft_mark: bool,
    pub can_be_restored: bool,
    pub strange_parts: bool,
    pub can_card_upgrade: bool,
    pub can_strangify: bool,
    pub can_killstreakify: bool,
    pub can_consume: bool,
}

/// The name of one style choice on an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct SchemaItemStyle {
    pub name: String,
}

/// An item definition from the game's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct SchemaItem {
    pub name: String,
    #[serde(rename = "defindex")]
    pub def_index: i32,
    #[serde(default)]
    pub item_class: Option<String>,
    #[serde(default)]
    pub item_type_name: Option<String>,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub item_description: Option<String>,
    #[serde(default)]
    pub proper_name: bool,
    #[serde(default)]
    pub item_slot: Option<String>,
    #[serde(default)]
    pub model_player: Option<String>,
    #[serde(default)]
    pub item_quality: i32,
    #[serde(default)]
    pub image_inventory: Option<String>,
    #[serde(rename = "min_ilevel", default)]
    pub min_item_level: i32,
    #[serde(rename = "max_ilevel", default)]
    pub max_item_level: i32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_url_large: Option<String>,
    #[serde(default)]
    pub drop_type: Option<String>,
    #[serde(default)]
    pub craft_class: Option<String>,
    #[serde(default)]
    pub craft_material_type: Option<String>,
    #[serde(default)]
    pub capabilities: SchemaItemCapabilities,
    #[serde(default)]
    pub styles: Vec<SchemaItemStyle>,
    #[serde(default)]
    pub used_by_classes: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeValue>,
}

/// A banner shown in the in-game store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Banner {
    #[serde(rename = "basefilename")]
    pub base_filename: String,
    pub action: String,
    pub placement: String,
    pub action_param: String,
}

/// Carousel banners to display in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct CarouselData {
    pub max_display_banners: i32,
    #[serde(default)]
    pub banners: Vec<Banner>,
}

/// A child element of a store tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct TabChild {
    pub name: String,
    pub id: String,
}

/// A store tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Tab {
    pub label: String,
    pub id: String,
    pub parent_id: i32,
    pub use_large_cells: bool,
    pub default: bool,
    #[serde(default)]
    pub children: Vec<TabChild>,
    pub home: bool,
    #[serde(default)]
    pub dropdown_prefab_id: Option<i64>,
    #[serde(default)]
    pub parent_name: Option<String>,
}

/// The "all" element of a store filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct AllElement {
    pub id: i32,
    pub localized_text: String,
}

/// A basic store filter element. `name` is either a string or a number
/// depending on the filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct FilterElement {
    #[serde(default)]
    pub name: Value,
    pub localized_text: String,
    pub id: i32,
}

/// A store data filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Filter {
    pub id: i32,
    pub name: String,
    pub url_history_param_name: String,
    pub all_element: AllElement,
    #[serde(default)]
    pub elements: Vec<FilterElement>,
    pub count: i32,
}

/// A sortable field in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Sorter {
    pub id: i64,
    pub name: String,
    pub data_type: String,
    pub sort_field: String,
    pub sort_reversed: bool,
    pub localized_text: String,
}

/// Reference to a [`Sorter`] by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct SorterId {
    pub id: i64,
}

/// Sorting configuration attached to a store prefab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct SortingPrefab {
    pub id: i64,
    pub name: String,
    pub url_history_param_name: String,
    #[serde(default)]
    pub sorter_ids: Vec<SorterId>,
}

/// Store sorting configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Sorting {
    #[serde(default)]
    pub sorters: Vec<Sorter>,
    #[serde(default)]
    pub sorting_prefabs: Vec<SortingPrefab>,
}

/// A store dropdown control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Dropdown {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub control_type: String,
    pub label_text: String,
    pub url_history_param_name: String,
}

/// Configuration of one dropdown inside a prefab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PrefabConfig {
    pub dropdown_id: i32,
    pub name: String,
    pub enabled: bool,
    pub default_selection_id: i32,
}

/// A store prefab and its dropdown configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Prefab {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub config: Vec<PrefabConfig>,
}

/// Dropdowns and prefabs for the store UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct DropdownData {
    #[serde(default)]
    pub dropdowns: Vec<Dropdown>,
    #[serde(default)]
    pub prefabs: Vec<Prefab>,
}

/// Base info for one player class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PlayerClassData {
    pub id: i32,
    pub base_name: String,
    pub localized_text: String,
}

/// Display ordering of a popular item on the store home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PopularItem {
    pub def_index: i32,
    pub order: i32,
}

/// Popular items shown on the store home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct HomePageData {
    pub home_category_id: i32,
    #[serde(default)]
    pub popular_items: Vec<PopularItem>,
}

/// The parent store container for an app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct StoreMetaData {
    #[serde(default)]
    pub carousel_data: Option<CarouselData>,
    #[serde(default)]
    pub tabs: Vec<Tab>,
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub sorting: Option<Sorting>,
    #[serde(default)]
    pub dropdown_data: Option<DropdownData>,
    #[serde(default)]
    pub player_class_data: Vec<PlayerClassData>,
    #[serde(default)]
    pub home_page_data: Option<HomePageData>,
}

/// Info on an item/asset class. The API shapes these loosely, so the
/// nested description/action lists are kept as raw JSON values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Asset {
    #[serde(default)]
    pub descriptions: Value,
    #[serde(rename = "fraudwarnings", default)]
    pub fraud_warnings: Value,
    #[serde(default)]
    pub tradable: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub asset_type: Option<String>,
    #[serde(default)]
    pub name_color: Option<String>,
    #[serde(default)]
    pub actions: Value,
}
