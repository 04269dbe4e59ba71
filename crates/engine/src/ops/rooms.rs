use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    CostCenterId, ResultEngine, RoomCmd, RoomUpdate,
    input::{find_mut, remove_by_id},
    util::normalize_name,
};

use super::CostingModel;

impl CostingModel {
    pub fn add_room(&mut self, cmd: RoomCmd) -> ResultEngine<Uuid> {
        self.mutate("add_room", |input| {
            let mut room = cmd.into_entity();
            room.name = normalize_name(&room.name, "Unnamed room");
            let id = room.id;
            input.rooms.push(room);
            Ok(id)
        })
    }

    pub fn update_room(&mut self, id: Uuid, update: RoomUpdate) -> ResultEngine<()> {
        self.mutate("update_room", |input| {
            let room = find_mut(&mut input.rooms, id)?;
            update.apply(room);
            room.name = normalize_name(&room.name, "Unnamed room");
            Ok(())
        })
    }

    /// Set the share of a room charged to `cost_center`; `None` removes it.
    pub fn set_room_split(
        &mut self,
        id: Uuid,
        cost_center: CostCenterId,
        percentage: Option<Decimal>,
    ) -> ResultEngine<()> {
        self.mutate("set_room_split", |input| {
            let room = find_mut(&mut input.rooms, id)?;
            match percentage {
                Some(percentage) => {
                    room.split.insert(cost_center, percentage);
                }
                None => {
                    room.split.remove(cost_center.as_str());
                }
            }
            Ok(())
        })
    }

    pub fn remove_room(&mut self, id: Uuid) -> ResultEngine<()> {
        self.mutate("remove_room", |input| {
            remove_by_id(&mut input.rooms, id)?;
            Ok(())
        })
    }
}
