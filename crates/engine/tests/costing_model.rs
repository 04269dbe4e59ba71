use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use engine::{
    AssetCmd, AssetUpdate, CostCenterId, CostCenterRegistry, CostingModel, EngineError,
    FinancialYear, ModelInput, NonSalaryCmd, RoomCmd, RoomUpdate, StaffCmd, UsageRecord,
    calculate,
};

fn cc(id: &str) -> CostCenterId {
    CostCenterId::new(id).unwrap()
}

fn empty_model() -> CostingModel {
    let registry = CostCenterRegistry::from_names(["A", "B", "C"]).unwrap();
    let input = ModelInput::new(FinancialYear::new(2025).unwrap(), registry);
    CostingModel::new(input).unwrap()
}

/// A small facility: two staff, one consumables line, one instrument, one
/// lab room and usage for A and B (C has cost but no usage).
fn facility() -> CostingModel {
    let mut model = empty_model();
    model
        .add_staff(
            StaffCmd::new("Lab manager", dec!(100000))
                .allocate(cc("A"), dec!(50))
                .allocate(cc("B"), dec!(50)),
        )
        .unwrap();
    model
        .add_staff(StaffCmd::new("Technician", dec!(40000)).allocate(cc("C"), dec!(10)))
        .unwrap();
    model
        .add_non_salary_item(
            NonSalaryCmd::new("Consumables")
                .amount(cc("A"), dec!(1200))
                .amount(cc("B"), dec!(300))
                .declared_total(dec!(1500)),
        )
        .unwrap();
    model
        .add_asset(AssetCmd::new("Confocal", dec!(100000), dec!(10), cc("A")))
        .unwrap();
    let lab = model.add_area_cost_type("Wet lab", dec!(200)).unwrap();
    model
        .add_room(
            RoomCmd::new("B.1.04", dec!(10), lab)
                .share(cc("A"), dec!(40))
                .share(cc("B"), dec!(60)),
        )
        .unwrap();
    model
        .set_usage(UsageRecord::new(cc("A"), dec!(250), dec!(200), "days"))
        .unwrap();
    model
        .set_usage(UsageRecord::new(cc("B"), dec!(100), dec!(0), "plates"))
        .unwrap();
    model
}

#[test]
fn empty_model_lists_every_cost_center_with_zero_costs() {
    let model = empty_model();
    let output = model.output();

    assert_eq!(output.summaries.len(), 3);
    assert_eq!(output.rates.len(), 3);
    for (summary, rates) in output.iter() {
        assert_eq!(summary.total_cost, Decimal::ZERO);
        assert_eq!(summary.usage.unit, "");
        assert_eq!(rates.including_all, Decimal::ZERO);
    }
}

#[test]
fn facility_is_costed_per_center() {
    let model = facility();
    let output = model.output();

    let a = output.summary("A").unwrap();
    assert_eq!(a.salary_cost, dec!(50000));
    assert_eq!(a.non_salary_cost, dec!(1200));
    assert_eq!(a.estates_cost, dec!(800));
    assert_eq!(a.depreciation_cost, dec!(10000));
    assert_eq!(a.total_cost, dec!(62000));

    let a_rates = output.rates_for("A").unwrap();
    assert_eq!(a_rates.including_all, dec!(310));
    assert_eq!(a_rates.direct_costs_only, a_rates.including_all);
    assert_eq!(a_rates.excluding_salaries, dec!(60));
    assert_eq!(a_rates.excluding_estates, dec!(306));
    assert_eq!(a_rates.excluding_depreciation, dec!(260));
    assert_eq!(a_rates.implied_income(a.usage.actual).unwrap(), dec!(62000));

    let b = output.summary("B").unwrap();
    assert_eq!(b.total_cost, dec!(51500));
    let b_rates = output.rates_for("B").unwrap();
    assert_eq!(b_rates.including_all, Decimal::ZERO);
    assert_eq!(b_rates.excluding_salaries, Decimal::ZERO);

    let c = output.summary("C").unwrap();
    assert_eq!(c.salary_cost, dec!(4000));
    assert_eq!(c.usage.actual, Decimal::ZERO);
}

#[test]
fn every_edit_recomputes_the_output() {
    let mut model = facility();
    let revision = model.revision();
    let staff_id = model.input().staff[0].id;

    model.set_salary(staff_id, dec!(120000)).unwrap();

    assert_eq!(model.revision(), revision + 1);
    assert_eq!(model.output().summary("A").unwrap().salary_cost, dec!(60000));
    assert_eq!(model.output(), &calculate(model.input()).unwrap());
}

#[test]
fn failed_edit_leaves_the_model_untouched() {
    let mut model = facility();
    let before_input = model.input().clone();
    let before_output = model.output().clone();
    let revision = model.revision();

    let err = model
        .add_asset(AssetCmd::new("Broken", dec!(1000), dec!(0), cc("A")))
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidLifespan { .. }));

    let err = model
        .add_staff(StaffCmd::new("Visitor", dec!(1000)).allocate(cc("Z"), dec!(100)))
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::UnknownCostCenter { field: "allocations", .. }
    ));

    assert_eq!(model.input(), &before_input);
    assert_eq!(model.output(), &before_output);
    assert_eq!(model.revision(), revision);
}

#[test]
fn renaming_an_item_keeps_its_values_and_position() {
    let mut model = facility();
    let second = model
        .add_non_salary_item(NonSalaryCmd::new("Travel").amount(cc("C"), dec!(50)))
        .unwrap();
    let first = model.input().non_salary_items[0].id;

    model.rename_non_salary_item(first, "Reagents").unwrap();

    let items = &model.input().non_salary_items;
    assert_eq!(items[0].id, first);
    assert_eq!(items[0].name, "Reagents");
    assert_eq!(items[0].per_cost_center.get("A"), Some(&dec!(1200)));
    assert_eq!(items[1].id, second);
}

#[test]
fn non_salary_amounts_and_declared_totals_are_editable() {
    let mut model = facility();
    let item = model.input().non_salary_items[0].id;

    model
        .set_non_salary_amount(item, cc("C"), Some(dec!(25)))
        .unwrap();
    model.set_non_salary_amount(item, cc("B"), None).unwrap();
    model.set_declared_total(item, dec!(9999)).unwrap();

    let output = model.output();
    assert_eq!(output.summary("C").unwrap().non_salary_cost, dec!(25));
    assert_eq!(output.summary("B").unwrap().non_salary_cost, Decimal::ZERO);
}

#[test]
fn staff_allocations_can_be_changed_and_cleared() {
    let mut model = facility();
    let technician = model.input().staff[1].id;

    model
        .set_staff_allocation(technician, cc("B"), dec!(90))
        .unwrap();
    model.clear_staff_allocation(technician, &cc("C")).unwrap();
    model.rename_staff(technician, "  Senior technician ").unwrap();

    let member = &model.input().staff[1];
    assert_eq!(member.name, "Senior technician");
    assert_eq!(model.output().summary("B").unwrap().salary_cost, dec!(86000));
    assert_eq!(model.output().summary("C").unwrap().salary_cost, Decimal::ZERO);

    model.remove_staff(technician).unwrap();
    assert_eq!(model.input().staff.len(), 1);
    assert_eq!(
        model.remove_staff(technician),
        Err(EngineError::KeyNotFound(format!("staff {technician}")))
    );
}

#[test]
fn asset_updates_move_depreciation_between_centers() {
    let mut model = facility();
    let asset = model.input().assets[0].id;

    model
        .update_asset(
            asset,
            AssetUpdate::default()
                .cost_center(cc("C"))
                .lifespan_years(dec!(5))
                .current_age(dec!(2)),
        )
        .unwrap();

    let output = model.output();
    assert_eq!(output.summary("A").unwrap().depreciation_cost, Decimal::ZERO);
    assert_eq!(output.summary("C").unwrap().depreciation_cost, dec!(20000));

    let err = model
        .update_asset(asset, AssetUpdate::default().lifespan_years(dec!(-3)))
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidLifespan {
            asset,
            lifespan_years: dec!(-3),
        }
    );

    model.remove_asset(asset).unwrap();
    assert_eq!(model.output().summary("C").unwrap().depreciation_cost, Decimal::ZERO);
}

#[test]
fn room_and_area_cost_edits_recost_estates() {
    let mut model = facility();
    let room = model.input().rooms[0].id;
    let lab = model.input().area_cost_types[0].id;

    model
        .update_area_cost_type(lab, Some("Containment lab"), Some(dec!(300)))
        .unwrap();
    assert_eq!(model.output().summary("A").unwrap().estates_cost, dec!(1200));

    model
        .update_room(room, RoomUpdate::default().area_m2(dec!(20)).name("B.1.05"))
        .unwrap();
    model.set_room_split(room, cc("C"), Some(dec!(10))).unwrap();
    model.set_room_split(room, cc("B"), None).unwrap();

    let output = model.output();
    assert_eq!(output.summary("A").unwrap().estates_cost, dec!(2400));
    assert_eq!(output.summary("B").unwrap().estates_cost, Decimal::ZERO);
    assert_eq!(output.summary("C").unwrap().estates_cost, dec!(600));

    assert_eq!(
        model.remove_area_cost_type(lab),
        Err(EngineError::AreaCostTypeInUse {
            area_cost_type: lab,
            room,
        })
    );

    let missing = Uuid::new_v4();
    assert_eq!(
        model.update_room(room, RoomUpdate::default().area_cost_type(missing)),
        Err(EngineError::UnknownAreaCostType {
            room,
            area_cost_type: missing,
        })
    );

    model.remove_room(room).unwrap();
    model.remove_area_cost_type(lab).unwrap();
    assert!(model.input().area_cost_types.is_empty());
}

#[test]
fn cost_centers_can_be_added_and_removed_when_unused() {
    let mut model = facility();

    model.add_cost_center(cc("D")).unwrap();
    let d = model.output().summary("D").unwrap();
    assert_eq!(d.total_cost, Decimal::ZERO);
    assert_eq!(model.output().summaries.last().unwrap().cost_center, cc("D"));

    assert_eq!(
        model.add_cost_center(cc("A")),
        Err(EngineError::ExistingKey("A".to_string()))
    );
    assert!(matches!(
        model.remove_cost_center(&cc("A")),
        Err(EngineError::CostCenterInUse { .. })
    ));

    model.remove_cost_center(&cc("D")).unwrap();
    assert!(model.output().summary("D").is_none());
}

#[test]
fn edits_match_cost_centers_by_normalized_name() {
    let registry = CostCenterRegistry::from_names(["Caf\u{e9}", "B"]).unwrap();
    let input = ModelInput::new(FinancialYear::new(2025).unwrap(), registry);
    let mut model = CostingModel::new(input).unwrap();
    let barista = model
        .add_staff(StaffCmd::new("Barista", dec!(1000)).allocate(cc("Caf\u{e9}"), dec!(100)))
        .unwrap();

    model
        .clear_staff_allocation(barista, &cc("Cafe\u{301}"))
        .unwrap();
    assert!(model.input().staff[0].allocations.is_empty());
    assert_eq!(
        model.output().summary("Caf\u{e9}").unwrap().salary_cost,
        Decimal::ZERO
    );

    model.remove_cost_center(&cc(" Caf\u{e9}")).unwrap();
    assert_eq!(model.input().cost_centers.len(), 1);
    assert_eq!(model.revision(), 3);
}

#[test]
fn usage_can_be_replaced_and_removed() {
    let mut model = facility();

    model
        .set_usage(UsageRecord::new(cc("B"), dec!(100), dec!(103), "plates"))
        .unwrap();
    assert_eq!(model.input().usage.len(), 2);
    assert_eq!(model.output().rates_for("B").unwrap().including_all, dec!(500));

    let removed = model.remove_usage(&cc("B")).unwrap();
    assert_eq!(removed.actual, dec!(103));
    assert_eq!(model.output().rates_for("B").unwrap().including_all, Decimal::ZERO);
    assert_eq!(
        model.remove_usage(&cc("B")),
        Err(EngineError::KeyNotFound("usage B".to_string()))
    );

    let err = model
        .set_usage(UsageRecord::new(cc("Z"), dec!(1), dec!(1), "days"))
        .unwrap_err();
    assert!(matches!(err, EngineError::UnknownCostCenter { .. }));
}

#[test]
fn notices_reflect_the_current_input() {
    let model = facility();
    let notices = model.notices().unwrap();

    // Technician allocated 10%, B has cost but zero usage, C has no usage.
    assert_eq!(notices.len(), 3);
}

#[test]
fn input_document_round_trips_through_json() {
    let model = facility();
    let json = serde_json::to_string(model.input()).unwrap();
    let input: ModelInput = serde_json::from_str(&json).unwrap();

    assert_eq!(&input, model.input());
    assert_eq!(&calculate(&input).unwrap(), model.output());
}

#[test]
fn hand_written_document_is_accepted() {
    let lab = Uuid::new_v4();
    let json = format!(
        r#"{{
            "financial_year": "2025-2026",
            "cost_centers": ["Imaging", "Genomics"],
            "area_cost_types": [{{ "id": "{lab}", "description": "Lab", "cost_per_area": 250 }}],
            "staff": [{{
                "id": "{}",
                "name": "Imaging manager",
                "annual_salary": "52000",
                "allocations": {{ "Imaging": 75, "Genomics": 25 }}
            }}],
            "rooms": [{{
                "id": "{}",
                "area_m2": 12,
                "area_cost_type": "{lab}",
                "split": {{ "Imaging": 100 }}
            }}],
            "usage": [{{ "cost_center": "Imaging", "capacity": 220, "actual": 150, "unit": "hours" }}]
        }}"#,
        Uuid::new_v4(),
        Uuid::new_v4()
    );

    let input: ModelInput = serde_json::from_str(&json).unwrap();
    let output = calculate(&input).unwrap();

    let imaging = output.summary("Imaging").unwrap();
    assert_eq!(imaging.salary_cost, dec!(39000));
    assert_eq!(imaging.estates_cost, dec!(3000));
    assert_eq!(output.rates_for("Imaging").unwrap().including_all, dec!(280));
    assert_eq!(output.summary("Genomics").unwrap().total_cost, dec!(13000));
}
