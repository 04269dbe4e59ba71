use uuid::Uuid;

use crate::{
    AssetCmd, AssetUpdate, ResultEngine,
    input::{find_mut, remove_by_id},
    util::normalize_name,
};

use super::CostingModel;

impl CostingModel {
    /// Add an asset. A non-positive lifespan is rejected and the model is
    /// left unchanged.
    pub fn add_asset(&mut self, cmd: AssetCmd) -> ResultEngine<Uuid> {
        self.mutate("add_asset", |input| {
            let mut asset = cmd.into_entity();
            asset.name = normalize_name(&asset.name, "Unnamed asset");
            let id = asset.id;
            input.assets.push(asset);
            Ok(id)
        })
    }

    pub fn update_asset(&mut self, id: Uuid, update: AssetUpdate) -> ResultEngine<()> {
        self.mutate("update_asset", |input| {
            let asset = find_mut(&mut input.assets, id)?;
            update.apply(asset);
            asset.name = normalize_name(&asset.name, "Unnamed asset");
            Ok(())
        })
    }

    pub fn remove_asset(&mut self, id: Uuid) -> ResultEngine<()> {
        self.mutate("remove_asset", |input| {
            remove_by_id(&mut input.assets, id)?;
            Ok(())
        })
    }
}
