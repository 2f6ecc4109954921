#![no_main]

use dettect_editor::domain::ports::NoopNotifier;
use dettect_editor::infrastructure::{FixedAnswer, MemoryFileSaver, NoopNavigator};
use dettect_editor::{AttackDomain, IdentityKey, PageController, PagePorts};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Each byte is one edit on a techniques page - this should never panic
    let mut page = PageController::techniques(PagePorts {
        notifier: NoopNotifier,
        confirm: FixedAnswer::YES,
        navigator: NoopNavigator,
        saver: MemoryFileSaver::new(),
    });
    page.new_file(AttackDomain::Enterprise);

    for byte in data {
        let n = (byte >> 3) as usize;
        match byte & 0x07 {
            0 => {
                page.add_record();
            }
            1 => {
                page.edit_selected(|r| r.set("technique_id", format!("T{:04}", n)));
            }
            2 => {
                page.delete_record(&IdentityKey::from(format!("T{:04}", n)));
            }
            3 => {
                page.undo_delete(&IdentityKey::from(format!("T{:04}", n)));
            }
            4 => {
                page.add_detail("detection");
            }
            5 => {
                page.delete_detail("visibility", &IdentityKey::from(format!("T{:04}-all", n)));
            }
            6 => {
                page.select_next();
            }
            _ => {
                let _ = page.save();
            }
        }
    }
});
