//! Test fixtures - administration files of every supported generation.

/// Data source file, version 1.0 (flat records, root platform)
pub const DATA_SOURCES_V10: &str = "\
version: 1.0
file_type: data-source-administration
name: example
platform: [Windows, Linux]
data_sources:
- data_source_name: Process monitoring
  date_registered: 2019-03-01
  date_connected: 2017-01-01
  products: [Windows event log, Sysmon]
  available_for_data_analytics: true
  comment: ''
  data_quality:
    device_completeness: 5
    data_field_completeness: 4
    timeliness: 5
    consistency: 5
    retention: 4
";

/// Data source file, version 1.1 (per-system rows); the single record lacks
/// `available_for_data_analytics`
pub const DATA_SOURCES_V11: &str = "\
version: 1.1
file_type: data-source-administration
name: example
domain: enterprise-attack
systems:
- applicable_to: workstations
  platform: [Windows]
- applicable_to: servers
  platform: [Linux, Windows]
data_sources:
- data_source_name: Process Creation
  data_source:
  - applicable_to: [workstations]
    date_registered: 2022-05-12
    date_connected: 2021-01-01
    products: [Sysmon]
    comment: ''
    data_quality:
      device_completeness: 3
      data_field_completeness: 4
      timeliness: 5
      consistency: 4
      retention: 3
";

/// Technique file; T1059 is detected on `all` and on `servers`
pub const TECHNIQUES: &str = "\
version: 1.2
file_type: technique-administration
name: example
domain: enterprise-attack
platform: [Windows]
techniques:
- technique_id: T1059
  technique_name: Command and Scripting Interpreter
  detection:
  - applicable_to: [all]
    location: [EDR]
    comment: ''
    score_logbook:
    - date: 2024-01-10
      score: 2
      comment: ''
  - applicable_to: [servers]
    location: [SIEM]
    comment: ''
    score_logbook:
    - date: 2024-02-01
      score: 3
      comment: ''
  visibility:
  - applicable_to: [all]
    comment: ''
    score_logbook:
    - date: 2024-01-10
      score: 2
      comment: ''
      auto_generated: false
- technique_id: T1003.001
  technique_name: LSASS Memory
  detection:
  - applicable_to: [all]
    location: ['']
    comment: ''
    score_logbook:
    - date:
      score: -1
      comment: ''
  visibility:
  - applicable_to: [all]
    comment: ''
    score_logbook:
    - date:
      score: 0
      comment: ''
      auto_generated: false
";

/// Group file
pub const GROUPS: &str = "\
version: 1.0
file_type: group-administration
domain: enterprise-attack
platform: [all]
groups:
- group_name: APT3
  campaign: ''
  technique_id: [T1059, T1003.001]
  software_id: [S0154]
  enabled: true
- group_name: FIN7
  campaign: Carbanak
  technique_id: [T1059]
  software_id: []
  enabled: false
";
