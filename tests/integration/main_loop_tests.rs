//! Main loop: start-up, cycle ordering, fixed idle period.

use crate::mock_hw::{MemoryTransport, MockHardware, RecordingDelay, RecordingSink};

use soilbridge::app::events::AppEvent;
use soilbridge::app::model::ActuatorChannel;
use soilbridge::app::service::BridgeService;
use soilbridge::config::BridgeConfig;
use soilbridge::link::host::HostLink;
use soilbridge::scheduler::CycleScheduler;

struct Rig {
    app: BridgeService,
    hw: MockHardware,
    link: HostLink<MemoryTransport>,
    sink: RecordingSink,
    sched: CycleScheduler<RecordingDelay>,
}

impl Rig {
    fn new(readings: [u16; 3]) -> Self {
        let config = BridgeConfig::default();
        let sched = CycleScheduler::new(RecordingDelay::default(), config.report_interval_ms);
        let mut app = BridgeService::new(config);
        let mut hw = MockHardware::with_readings(readings);
        let mut sink = RecordingSink::new();
        app.start(&mut hw, &mut sink);
        Self {
            app,
            hw,
            link: HostLink::new(MemoryTransport::new()),
            sink,
            sched,
        }
    }

    fn cycle(&mut self) {
        self.sched
            .run_cycle(&mut self.app, &mut self.hw, &mut self.link, &mut self.sink);
    }
}

#[test]
fn start_drives_all_outputs_off() {
    let rig = Rig::new([0, 0, 0]);

    assert_eq!(rig.hw.writes.len(), 4);
    assert!(rig.hw.writes.iter().all(|w| !w.on));
    assert!(ActuatorChannel::ALL.iter().all(|&ch| !rig.hw.level(ch)));
    assert_eq!(rig.sink.events, vec![AppEvent::Started]);
}

#[test]
fn command_then_report_in_one_cycle() {
    let mut rig = Rig::new([512, 300, 700]);

    rig.link.transport_mut().send("TEMP_BAIXA ON\n");
    rig.cycle();

    assert!(rig.hw.level(ActuatorChannel::TempLow));
    assert_eq!(rig.link.transport().lines(), vec!["SOLO:512,300,700"]);

    // Dispatch runs before the report within the cycle.
    let set_idx = rig
        .sink
        .events
        .iter()
        .position(|e| matches!(e, AppEvent::ActuatorSet { .. }))
        .unwrap();
    let report_idx = rig
        .sink
        .events
        .iter()
        .position(|e| matches!(e, AppEvent::Reported(_)))
        .unwrap();
    assert!(set_idx < report_idx);
}

#[test]
fn silent_host_keeps_states_and_reports_every_cycle() {
    let mut rig = Rig::new([400, 401, 402]);

    rig.link.transport_mut().send("UMID ON\n");
    rig.cycle();
    let writes_after_command = rig.hw.writes.len();

    for _ in 0..10 {
        rig.cycle();
    }

    assert_eq!(rig.hw.writes.len(), writes_after_command, "no output touched");
    assert!(rig.hw.level(ActuatorChannel::Humidifier));
    assert!(!rig.hw.level(ActuatorChannel::IrrigationValve));

    let lines = rig.link.transport().lines();
    assert_eq!(lines.len(), 11);
    assert!(lines.iter().all(|l| l == "SOLO:400,401,402"));
}

#[test]
fn no_command_ever_means_all_off() {
    let mut rig = Rig::new([1, 2, 3]);

    for _ in 0..10 {
        rig.cycle();
    }

    assert!(ActuatorChannel::ALL.iter().all(|&ch| !rig.app.is_on(ch)));
    assert_eq!(rig.link.transport().lines().len(), 10);
}

#[test]
fn each_cycle_idles_for_the_configured_period() {
    let mut rig = Rig::new([0, 0, 0]);

    for _ in 0..5 {
        rig.cycle();
    }

    assert_eq!(rig.sched.cycles(), 5);
    assert_eq!(rig.sched.delay().slept_ms, vec![2000; 5]);
}

#[test]
fn backlog_drains_one_line_per_cycle() {
    let mut rig = Rig::new([0, 0, 0]);

    rig.link
        .transport_mut()
        .send("TEMP_BAIXA ON\nUMID ON\nIRRIGACAO ON\n");

    rig.cycle();
    assert!(rig.hw.level(ActuatorChannel::TempLow));
    assert!(!rig.hw.level(ActuatorChannel::Humidifier));

    rig.cycle();
    assert!(rig.hw.level(ActuatorChannel::Humidifier));
    assert!(!rig.hw.level(ActuatorChannel::IrrigationValve));

    rig.cycle();
    assert!(rig.hw.level(ActuatorChannel::IrrigationValve));
    assert_eq!(rig.link.transport().lines().len(), 3);
}
