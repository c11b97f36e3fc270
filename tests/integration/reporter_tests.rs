//! Sensor Reporter: three probes → one `SOLO:` line.

use crate::mock_hw::{MemoryTransport, MockHardware, RecordingSink};

use soilbridge::app::events::AppEvent;
use soilbridge::app::model::{SoilReport, SoilSensor};
use soilbridge::app::service::BridgeService;
use soilbridge::config::BridgeConfig;
use soilbridge::link::host::HostLink;

#[test]
fn report_line_carries_readings_in_probe_order() {
    let mut app = BridgeService::new(BridgeConfig::default());
    let mut hw = MockHardware::with_readings([512, 300, 700]);
    let mut link = HostLink::new(MemoryTransport::new());
    let mut sink = RecordingSink::new();

    let report = app.report(&mut hw, &mut link, &mut sink);

    assert_eq!(report, SoilReport { raw: [512, 300, 700] });
    assert_eq!(link.transport().tx, b"SOLO:512,300,700\n");
    assert_eq!(hw.reads, SoilSensor::ALL.to_vec());
    assert_eq!(sink.events, vec![AppEvent::Reported(report)]);
}

#[test]
fn raw_values_pass_through_unmodified() {
    let mut app = BridgeService::new(BridgeConfig::default());
    let mut hw = MockHardware::with_readings([0, 4095, u16::MAX]);
    let mut link = HostLink::new(MemoryTransport::new());
    let mut sink = RecordingSink::new();

    app.report(&mut hw, &mut link, &mut sink);

    assert_eq!(link.transport().lines(), vec!["SOLO:0,4095,65535"]);
}

#[test]
fn consecutive_reports_are_independent() {
    let mut app = BridgeService::new(BridgeConfig::default());
    let mut hw = MockHardware::new();
    hw.script.extend([[900, 900, 900], [10, 20, 30]]);
    let mut link = HostLink::new(MemoryTransport::new());
    let mut sink = RecordingSink::new();

    app.report(&mut hw, &mut link, &mut sink);
    app.report(&mut hw, &mut link, &mut sink);

    assert_eq!(
        link.transport().lines(),
        vec!["SOLO:900,900,900", "SOLO:10,20,30"],
        "no smoothing or memory of the previous cycle"
    );
}

#[test]
fn threshold_does_not_drive_irrigation() {
    let config = BridgeConfig::default();
    let dry = config.moisture_threshold / 2;
    let mut app = BridgeService::new(config);
    let mut hw = MockHardware::with_readings([dry, dry, dry]);
    let mut link = HostLink::new(MemoryTransport::new());
    let mut sink = RecordingSink::new();

    app.report(&mut hw, &mut link, &mut sink);

    assert!(hw.writes.is_empty(), "irrigation is the host's decision");
}

#[test]
fn failed_write_is_swallowed() {
    let mut app = BridgeService::new(BridgeConfig::default());
    let mut hw = MockHardware::with_readings([1, 2, 3]);
    let mut link = HostLink::new(MemoryTransport {
        fail_writes: true,
        ..MemoryTransport::default()
    });
    let mut sink = RecordingSink::new();

    let report = app.report(&mut hw, &mut link, &mut sink);

    assert_eq!(report.raw, [1, 2, 3]);
    assert_eq!(sink.events, vec![AppEvent::ReportDropped]);
}
