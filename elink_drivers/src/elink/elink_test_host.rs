//! Register file and MDIO bus model used by the unit tests.

use super::{
    elink_hw::{ElinkHost, EventLog, GpioIntMode, GpioMode},
    elink_regs::*,
};
use alloc::{collections::BTreeMap, vec::Vec};

pub struct MockHost {
    pub regs: BTreeMap<u32, u32>,
    pub mdio: BTreeMap<(u8, u8, u16), u16>,
    mdio_addr: BTreeMap<u32, (u8, u8, u16)>,

    /// Never clear the MDIO busy bit.
    pub mdio_stuck: bool,

    /// Contents of a plugged SFP+ module behind the PHY two-wire bridge.
    pub sfp_eeprom: Option<Vec<u8>>,

    pub writes: Vec<(u32, u32)>,
    pub mdio_writes: Vec<(u8, u8, u16, u16)>,
    pub gpio: Vec<(u8, GpioMode, u8)>,
    pub gpio_int: Vec<(u8, GpioIntMode, u8)>,
    pub gpio_in: BTreeMap<(u8, u8), u32>,
    pub fw_cmds: Vec<(u32, u32)>,
    pub fw_response: u32,
    pub events: Vec<EventLog>,
    pub elapsed_us: u64,
    pub path_id: u8,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            regs: BTreeMap::new(),
            mdio: BTreeMap::new(),
            mdio_addr: BTreeMap::new(),
            mdio_stuck: false,
            sfp_eeprom: None,
            writes: Vec::new(),
            mdio_writes: Vec::new(),
            gpio: Vec::new(),
            gpio_int: Vec::new(),
            gpio_in: BTreeMap::new(),
            fw_cmds: Vec::new(),
            fw_response: 0,
            events: Vec::new(),
            elapsed_us: 0,
            path_id: 0,
        }
    }

    pub fn read(&self, addr: u32) -> u32 {
        self.regs.get(&addr).copied().unwrap_or(0)
    }

    pub fn set(&mut self, addr: u32, val: u32) {
        self.regs.insert(addr, val);
    }

    pub fn mdio_reg(&self, phy_addr: u8, devad: u8, reg: u16) -> u16 {
        self.mdio.get(&(phy_addr, devad, reg)).copied().unwrap_or(0)
    }

    pub fn set_mdio_reg(&mut self, phy_addr: u8, devad: u8, reg: u16, val: u16) {
        self.mdio.insert((phy_addr, devad, reg), val);
    }

    /// Writes to `addr` recorded so far, oldest first.
    pub fn writes_to(&self, addr: u32) -> Vec<u32> {
        self.writes
            .iter()
            .filter(|(a, _)| *a == addr)
            .map(|(_, v)| *v)
            .collect()
    }

    pub fn mdio_writes_to(&self, phy_addr: u8, devad: u8, reg: u16) -> Vec<u16> {
        self.mdio_writes
            .iter()
            .filter(|(a, d, r, _)| *a == phy_addr && *d == devad && *r == reg)
            .map(|(_, _, _, v)| *v)
            .collect()
    }

    pub fn clear_log(&mut self) {
        self.writes.clear();
        self.mdio_writes.clear();
        self.gpio.clear();
        self.fw_cmds.clear();
        self.events.clear();
    }

    fn is_mdio_comm(addr: u32) -> bool {
        addr == GRCBASE_EMAC0 + EMAC_REG_EMAC_MDIO_COMM
            || addr == GRCBASE_EMAC1 + EMAC_REG_EMAC_MDIO_COMM
    }

    fn is_emac_mode(addr: u32) -> bool {
        addr == GRCBASE_EMAC0 + EMAC_REG_EMAC_MODE || addr == GRCBASE_EMAC1 + EMAC_REG_EMAC_MODE
    }

    fn pbf_init_port(addr: u32) -> Option<u32> {
        (0..2).find(|port| addr == PBF_REG_INIT_P0 + port * 4)
    }

    fn mdio_command(&mut self, comm: u32, cmd: u32) {
        if self.mdio_stuck {
            self.regs.insert(comm, cmd);
            return;
        }

        let phy_addr = ((cmd >> 21) & 0x1f) as u8;
        let devad = ((cmd >> 16) & 0x1f) as u8;
        let data = (cmd & 0xffff) as u16;
        let mut result = cmd & !EMAC_MDIO_COMM_START_BUSY;

        match cmd & (3 << 26) {
            EMAC_MDIO_COMM_COMMAND_ADDRESS => {
                self.mdio_addr.insert(comm, (phy_addr, devad, data));
            }
            EMAC_MDIO_COMM_COMMAND_WRITE_45 => {
                if let Some(&(a, d, r)) = self.mdio_addr.get(&comm) {
                    // Reset bits self clear.
                    let val = if r == 0 || r == MDIO_REG_BANK_COMBO_IEEE0 {
                        data & !0x8000
                    } else {
                        data
                    };
                    self.mdio.insert((a, d, r), val);
                    self.mdio_writes.push((a, d, r, data));

                    if d == MDIO_PMA_DEVAD && r == MDIO_PMA_REG_SFP_TWO_WIRE_CTRL {
                        self.two_wire_command(a, data);
                    }
                }
            }
            EMAC_MDIO_COMM_COMMAND_READ_45 => {
                let target = self.mdio_addr.get(&comm).copied();
                let val = target.map(|(a, d, r)| self.mdio_reg(a, d, r)).unwrap_or(0);
                result = (result & !EMAC_MDIO_COMM_DATA) | val as u32;

                // The bridge drops back to idle once completion was observed.
                if let Some((a, d, r)) = target {
                    if d == MDIO_PMA_DEVAD
                        && r == MDIO_PMA_REG_SFP_TWO_WIRE_CTRL
                        && val & MDIO_PMA_REG_SFP_TWO_WIRE_CTRL_STATUS_MASK
                            == MDIO_PMA_REG_SFP_TWO_WIRE_STATUS_COMPLETE
                    {
                        self.mdio.insert((a, d, r), MDIO_PMA_REG_SFP_TWO_WIRE_STATUS_IDLE);
                    }
                }
            }
            _ => (),
        }

        self.regs.insert(comm, result);
    }
}

impl MockHost {
    /// Two-wire read commands of the 8726 (0x2c0f) and 8727 (0x8002) bridges.
    fn two_wire_command(&mut self, phy_addr: u8, cmd: u16) {
        let data_buf = match cmd {
            0x2c0f => MDIO_PMA_REG_8726_TWO_WIRE_DATA_BUF,
            0x8002 => MDIO_PMA_REG_8727_TWO_WIRE_DATA_BUF,
            _ => return,
        };

        let Some(eeprom) = self.sfp_eeprom.as_ref() else {
            return;
        };

        let addr = self.mdio_reg(phy_addr, MDIO_PMA_DEVAD, MDIO_PMA_REG_SFP_TWO_WIRE_MEM_ADDR);
        let cnt = self.mdio_reg(phy_addr, MDIO_PMA_DEVAD, MDIO_PMA_REG_SFP_TWO_WIRE_BYTE_CNT) & 0xff;
        let bytes: Vec<u16> = (0..cnt)
            .map(|i| eeprom.get((addr + i) as usize).copied().unwrap_or(0) as u16)
            .collect();

        for (i, b) in bytes.into_iter().enumerate() {
            self.mdio
                .insert((phy_addr, MDIO_PMA_DEVAD, data_buf + i as u16), b);
        }
        self.mdio.insert(
            (phy_addr, MDIO_PMA_DEVAD, MDIO_PMA_REG_SFP_TWO_WIRE_CTRL),
            MDIO_PMA_REG_SFP_TWO_WIRE_STATUS_COMPLETE,
        );
    }
}

impl ElinkHost for MockHost {
    fn reg_read(&mut self, addr: u32) -> u32 {
        self.read(addr)
    }

    fn reg_write(&mut self, addr: u32, val: u32) {
        self.writes.push((addr, val));
        if Self::is_mdio_comm(addr) && val & EMAC_MDIO_COMM_START_BUSY != 0 {
            self.mdio_command(addr, val);
        } else if Self::is_emac_mode(addr) {
            // Soft reset completes immediately.
            self.regs.insert(addr, val & !EMAC_MODE_RESET);
        } else if let Some(port) = Self::pbf_init_port(addr) {
            // Latching the init credit reloads the running credit.
            if val == 1 {
                let init_crd = self.read(PBF_REG_P0_INIT_CRD + port * 4);
                self.regs.insert(PBF_REG_P0_CREDIT + port * 8, init_crd);
            }
            self.regs.insert(addr, val);
        } else {
            self.regs.insert(addr, val);
        }
    }

    fn reg_block_read(&mut self, addr: u32, buf: &mut [u32]) {
        for (i, word) in buf.iter_mut().enumerate() {
            *word = self.read(addr + (i as u32) * 4);
        }
    }

    fn reg_block_write(&mut self, addr: u32, buf: &[u32]) {
        for (i, word) in buf.iter().enumerate() {
            self.reg_write(addr + (i as u32) * 4, *word);
        }
    }

    fn gpio_write(&mut self, pin: u8, mode: GpioMode, port: u8) {
        self.gpio.push((pin, mode, port));
    }

    fn gpio_read(&mut self, pin: u8, port: u8) -> u32 {
        self.gpio_in.get(&(pin, port)).copied().unwrap_or(0)
    }

    fn gpio_int_write(&mut self, pin: u8, mode: GpioIntMode, port: u8) {
        self.gpio_int.push((pin, mode, port));
    }

    fn udelay(&mut self, usecs: u32) {
        self.elapsed_us += usecs as u64;
    }

    fn firmware_command(&mut self, command: u32, param: u32) -> u32 {
        self.fw_cmds.push((command, param));
        self.fw_response
    }

    fn event_log(&mut self, event: EventLog) {
        self.events.push(event);
    }

    fn path_id(&self) -> u8 {
        self.path_id
    }
}
