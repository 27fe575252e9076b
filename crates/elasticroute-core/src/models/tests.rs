#[cfg(test)]
mod model_tests {
    use crate::models::{
        ConnectionType, Depot, DepotField, DistanceUnit, GeneralSettings, Plan, PlanStatus, Stop,
        StopField, Vehicle, VehicleField,
    };
    use crate::wire::{DepotRecord, StopRecord, VehicleRecord};

    fn create_test_stop() -> Stop {
        let mut stop = Stop::with_address("Customer 1", "15 Simei Street 4").unwrap();
        stop.clear_changes();
        stop
    }

    #[test]
    fn test_rejected_name_leaves_entity_unchanged() {
        let mut stop = create_test_stop();
        let err = stop.set_name("   ").unwrap_err();
        assert!(err.is_bad_field());
        assert_eq!(err.to_string(), "Stop name cannot be null");
        assert_eq!(stop.name(), "Customer 1");
        assert!(stop.changes().is_empty());

        let mut vehicle = Vehicle::new("Van 1").unwrap();
        let err = vehicle.set_name(&"V".repeat(256)).unwrap_err();
        assert_eq!(err.to_string(), "Vehicle name cannot be more than 255 chars");
        assert_eq!(vehicle.name(), "Van 1");

        let err = Depot::new("").unwrap_err();
        assert_eq!(err.to_string(), "Depot name cannot be null");
    }

    #[test]
    fn test_names_are_trimmed() {
        let depot = Depot::new("  Main Warehouse  ").unwrap();
        assert_eq!(depot.name(), "Main Warehouse");
    }

    #[test]
    fn test_negative_loads_are_rejected() {
        let mut stop = create_test_stop();
        stop.set_weight_load(Some(4.0)).unwrap();

        let err = stop.set_weight_load(Some(-0.5)).unwrap_err();
        assert_eq!(err.to_string(), "Stop WeightLoad cannot be negative");
        assert_eq!(stop.weight_load(), Some(4.0));

        let err = stop.set_seating_load(Some(-1.0)).unwrap_err();
        assert_eq!(err.to_string(), "Stop SeatingLoad cannot be negative");
        assert!(stop.set_volume_load(Some(0.0)).is_ok());
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let mut stop = create_test_stop();
        let err = stop.set_weight_load(Some(f64::INFINITY)).unwrap_err();
        assert_eq!(err.to_string(), "Stop WeightLoad must be a finite number");
        assert_eq!(stop.weight_load(), None);

        stop.set_address(None);
        let err = stop.set_lat(Some(f64::NAN)).unwrap_err();
        assert_eq!(err.to_string(), "Stop Lat must be a finite number");
        assert!(stop.set_lng(Some(f64::NEG_INFINITY)).is_err());
        assert_eq!(stop.lat(), None);
        assert_eq!(stop.lng(), None);
        assert!(!stop.is_locatable());
        assert!(!stop.changes().contains(StopField::Lat));

        let mut depot = Depot::new("Main Warehouse").unwrap();
        let err = depot.set_lng(Some(f64::INFINITY)).unwrap_err();
        assert_eq!(err.to_string(), "Depot Lng must be a finite number");
        assert!(Depot::with_coordinates("North", f64::NAN, 103.8).is_err());

        let mut vehicle = Vehicle::new("Van 1").unwrap();
        assert!(vehicle.set_volume_capacity(Some(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_negative_capacities_are_rejected() {
        let mut vehicle = Vehicle::new("Van 1").unwrap();
        let err = vehicle.set_weight_capacity(Some(-10.0)).unwrap_err();
        assert_eq!(err.to_string(), "Vehicle WeightCapacity cannot be negative");
        assert_eq!(vehicle.weight_capacity(), None);
        assert!(!vehicle.changes().contains(VehicleField::WeightCapacity));
    }

    #[test]
    fn test_unchanged_writes_are_not_tracked() {
        let mut stop = create_test_stop();
        stop.set_address(Some("15 Simei Street 4".to_string()));
        stop.set_name("Customer 1").unwrap();
        assert!(stop.changes().is_empty());

        stop.set_till(Some(1700));
        stop.set_till(Some(1700));
        stop.set_from(Some(900));
        assert_eq!(stop.changes().names(), vec!["Till", "From"]);
    }

    #[test]
    fn test_result_fields_are_never_dirty() {
        let mut stop = create_test_stop();
        let record = StopRecord {
            name: "Customer 1".to_string(),
            address: Some("15 Simei Street 4".to_string()),
            assign_to: Some("Van 1".to_string()),
            run: Some(1),
            sequence: Some(3),
            ..StopRecord::default()
        };
        stop.absorb(&record).unwrap();

        assert_eq!(stop.assign_to(), Some("Van 1"));
        assert_eq!(stop.sequence(), Some(3));
        assert!(!stop.changes().contains(StopField::AssignTo));
        assert!(stop.changes().is_empty());
    }

    #[test]
    fn test_rejected_absorb_leaves_stop_untouched() {
        let mut stop = create_test_stop();
        stop.set_weight_load(Some(2.0)).unwrap();
        let record = StopRecord {
            name: "Customer 1".to_string(),
            weight_load: Some(-1.0),
            ..StopRecord::default()
        };

        assert!(stop.absorb(&record).is_err());
        assert_eq!(stop.address(), Some("15 Simei Street 4"));
        assert_eq!(stop.weight_load(), Some(2.0));
        assert!(stop.changes().contains(StopField::WeightLoad));
    }

    #[test]
    fn test_vehicle_type_operations() {
        let mut vehicle = Vehicle::new("Van 1").unwrap();
        vehicle.clear_changes();

        vehicle.set_vehicle_types(["chiller", "van", "chiller"]);
        assert_eq!(vehicle.vehicle_types(), ["chiller", "van"]);
        assert!(vehicle.changes().contains(VehicleField::VehicleTypes));

        vehicle.clear_changes();
        assert!(!vehicle.add_vehicle_type("van"));
        assert!(vehicle.changes().is_empty());
        assert!(vehicle.add_vehicle_type("bike"));
        assert!(vehicle.remove_vehicle_type("chiller"));
        assert!(!vehicle.remove_vehicle_type("truck"));
        assert_eq!(vehicle.vehicle_types(), ["van", "bike"]);
    }

    #[test]
    fn test_vehicle_availability_bounds() {
        let mut vehicle = Vehicle::new("Van 1").unwrap();
        assert!(vehicle.set_avail_from(Some(0)).is_ok());
        assert!(vehicle.set_avail_till(Some(2359)).is_ok());

        let err = vehicle.set_avail_till(Some(2400)).unwrap_err();
        assert_eq!(err.to_string(), "Vehicle AvailTill must be between 0 and 2359");
        assert_eq!(vehicle.avail_till(), Some(2359));

        let err = vehicle.set_avail_from(Some(3000)).unwrap_err();
        assert_eq!(err.to_string(), "Vehicle AvailFrom must be between 0 and 2359");
    }

    #[test]
    fn test_vehicle_absorb_null_types_clear_list() {
        let mut vehicle = Vehicle::new("Van 1").unwrap();
        vehicle.set_vehicle_types(["van"]);
        vehicle
            .absorb(&VehicleRecord {
                name: "Van 1".to_string(),
                ..VehicleRecord::default()
            })
            .unwrap();
        assert!(vehicle.vehicle_types().is_empty());
        assert!(vehicle.changes().is_empty());
    }

    #[test]
    fn test_settings_window_bounds() {
        let mut settings = GeneralSettings::default();
        assert!(settings.set_from(Some(0)).is_ok());
        assert!(settings.set_till(Some(2400)).is_ok());

        let err = settings.set_till(Some(2401)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "AvailTill of GeneralSettings must be between 0 and 2400"
        );
        assert_eq!(settings.till(), Some(2400));

        let err = settings.set_from(Some(2500)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "AvailFrom of GeneralSettings must be between 0 and 2400"
        );
    }

    #[test]
    fn test_settings_defaults() {
        let settings = GeneralSettings::default();
        assert_eq!(settings.country, "SG");
        assert_eq!(settings.timezone, "Asia/Singapore");
        assert_eq!(settings.distance_unit, DistanceUnit::Km);
    }

    #[test]
    fn test_depot_default_flag() {
        let mut depot = Depot::with_coordinates("Main Warehouse", 1.3287, 103.9247).unwrap();
        assert!(depot.is_locatable());
        depot.clear_changes();
        depot.set_default(Some(true));
        assert_eq!(depot.changes().names(), vec!["Default"]);

        depot
            .absorb(&DepotRecord {
                name: "Main Warehouse".to_string(),
                is_default: Some(false),
                ..DepotRecord::default()
            })
            .unwrap();
        assert_eq!(depot.is_default(), Some(false));
        assert_eq!(depot.lat(), None);
        assert!(!depot.is_locatable());
        assert!(!depot.changes().contains(DepotField::IsDefault));
    }

    #[test]
    fn test_plan_defaults_and_lookup() {
        let mut plan = Plan::new("TestPlan_1");
        assert_eq!(plan.status(), PlanStatus::Unsubmitted);
        assert_eq!(plan.connection_type(), ConnectionType::Sync);
        assert_eq!(plan.progress(), 0);

        plan.stops.push(Stop::new("Customer 1").unwrap());
        assert!(plan.stop("Customer 1").is_some());
        assert!(plan.stop("Customer 2").is_none());
    }

    #[test]
    fn test_plan_key_resolution() {
        let mut plan = Plan::new("TestPlan_1");
        assert_eq!(plan.resolve_api_key(Some("global")), Some("global"));
        assert_eq!(plan.resolve_api_key(None), None);

        plan.set_api_key(Some("own".to_string()));
        assert_eq!(plan.resolve_api_key(Some("global")), Some("own"));
    }

    #[test]
    fn test_route_for_orders_by_run_and_sequence() {
        let mut plan = Plan::new("TestPlan_1");
        for (name, run, sequence) in [("C", 2, 1), ("A", 1, 2), ("B", 1, 1)] {
            let mut stop = Stop::new(name).unwrap();
            stop.absorb(&StopRecord {
                name: name.to_string(),
                assign_to: Some("Van 1".to_string()),
                run: Some(run),
                sequence: Some(sequence),
                ..StopRecord::default()
            })
            .unwrap();
            plan.stops.push(stop);
        }
        plan.stops.push(Stop::new("Unassigned").unwrap());

        let route: Vec<&str> = plan.route_for("Van 1").iter().map(|s| s.name()).collect();
        assert_eq!(route, vec!["B", "A", "C"]);
    }
}
