use super::{
    elink_7101, elink_8073, elink_8705, elink_8727, elink_848xx, elink_87x6,
    elink_hw::{
        msleep, ElinkHost, EventLog, FlowCtrl, GpioMode, LedMode, MdioAccess, Params, Phy,
        PhyIndex, PhyType, Vars, SPEED_AUTO_NEG,
    },
    elink_internal,
    elink_regs::*,
    ElinkDriverErr,
};
use alloc::{boxed::Box, string::String};

const MDIO_POLL_COUNT: u32 = 50;
const MDIO_CLOCK_CNT: u32 = 49;

/// Actions reachable through `PhyOperations::phy_specific_func`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhySpecificAction {
    DisableTx,
    EnableTx,
}

pub trait PhyOperations: Send {
    /// config_init - Bring the PHY up for the requested speed and pause mode
    fn config_init(
        &self,
        phy: &mut Phy,
        params: &Params,
        vars: &mut Vars,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr>;

    /// link_status - Read link state into `vars`
    /// MDIO failures are returned to the caller as errors.
    fn link_status(
        &self,
        phy: &mut Phy,
        params: &Params,
        vars: &mut Vars,
        host: &mut dyn ElinkHost,
    ) -> Result<bool, ElinkDriverErr>;

    /// read_status - Read link state, reporting a failed read as link down
    fn read_status(
        &self,
        phy: &mut Phy,
        params: &Params,
        vars: &mut Vars,
        host: &mut dyn ElinkHost,
    ) -> bool {
        match self.link_status(phy, params, vars, host) {
            Ok(link_up) => link_up,
            Err(e) => {
                log::debug!(
                    "elink: port {} {:?} status read failed: {}",
                    params.port,
                    phy.phy_type,
                    e
                );
                false
            }
        }
    }

    fn link_reset(
        &self,
        _phy: &Phy,
        _params: &Params,
        _host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        Ok(())
    }

    fn config_loopback(
        &self,
        _phy: &Phy,
        _params: &Params,
        _host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        Ok(())
    }

    /// format_fw_version - Render a raw firmware version for display
    fn format_fw_version(
        &self,
        raw_ver: u32,
        buf: &mut String,
        max_len: usize,
    ) -> Result<(), ElinkDriverErr> {
        format_ver(raw_ver, buf, max_len)
    }

    fn hw_reset(&self, _phy: &Phy, _params: &Params, _host: &mut dyn ElinkHost) {}

    fn set_link_led(
        &self,
        _phy: &Phy,
        _params: &Params,
        _mode: LedMode,
        _host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        Ok(())
    }

    fn phy_specific_func(
        &self,
        _phy: &Phy,
        _params: &Params,
        _action: PhySpecificAction,
        _host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        Ok(())
    }
}

/// Operation table of a chip family. Sentinel types have none.
pub fn get_operations(phy_type: PhyType) -> Option<Box<dyn PhyOperations>> {
    use PhyType::*;

    let ops = match phy_type {
        NotConnected | Failure => return None,
        Serdes => elink_internal::get_serdes(),
        Xgxs => elink_internal::get_xgxs(),
        Sfx7101 => elink_7101::get_self(),
        Bcm8073 => elink_8073::get_self(),
        Bcm8705 => elink_8705::get_self(),
        Bcm8706 => elink_87x6::get_8706(),
        Bcm8726 => elink_87x6::get_8726(),
        Bcm8727 => elink_8727::get_self(),
        Bcm8481 => elink_848xx::get_8481(),
        Bcm84823 | Bcm84833 => elink_848xx::get_848x3(),
    };

    Some(ops)
}

/// Run `f` against the PHY stored in slot `idx`.
///
/// The PHY is copied out of `params` for the duration of the call so that
/// the operation can read the rest of the port configuration, and written back after.
pub fn with_phy<R>(
    params: &mut Params,
    idx: PhyIndex,
    f: impl FnOnce(&dyn PhyOperations, &mut Phy, &Params) -> R,
) -> Option<R> {
    let mut phy = *params.phy(idx);
    let ops = get_operations(phy.phy_type)?;
    let ret = f(ops.as_ref(), &mut phy, params);
    *params.phy_mut(idx) = phy;
    Some(ret)
}

/// Base of the EMAC block whose MDIO master serves `port` under `access`.
pub fn emac_base(host: &mut dyn ElinkHost, access: MdioAccess, port: u8) -> u32 {
    match access {
        MdioAccess::PhyType => 0,
        MdioAccess::Emac0 => {
            if host.reg_read(NIG_REG_PORT_SWAP) != 0 {
                GRCBASE_EMAC1
            } else {
                GRCBASE_EMAC0
            }
        }
        MdioAccess::Emac1 => {
            if host.reg_read(NIG_REG_PORT_SWAP) != 0 {
                GRCBASE_EMAC0
            } else {
                GRCBASE_EMAC1
            }
        }
        MdioAccess::Both => {
            if port != 0 {
                GRCBASE_EMAC1
            } else {
                GRCBASE_EMAC0
            }
        }
        MdioAccess::Swapped => {
            if port != 0 {
                GRCBASE_EMAC0
            } else {
                GRCBASE_EMAC1
            }
        }
    }
}

/// Switch the EMAC MDIO master into clause 45 mode at 2.5MHz with auto poll off.
/// Returns the mode to restore afterwards.
fn mdio_enter_cl45(host: &mut dyn ElinkHost, phy: &Phy) -> u32 {
    let mode_reg = phy.mdio_ctrl + EMAC_REG_EMAC_MDIO_MODE;
    let saved_mode = host.reg_read(mode_reg);

    let mut tmp = saved_mode & !(EMAC_MDIO_MODE_AUTO_POLL | EMAC_MDIO_MODE_CLOCK_CNT);
    tmp |= EMAC_MDIO_MODE_CLAUSE_45 | (MDIO_CLOCK_CNT << EMAC_MDIO_MODE_CLOCK_CNT_BITSHIFT);
    host.reg_write(mode_reg, tmp);
    host.reg_read(mode_reg);
    host.udelay(40);

    saved_mode
}

/// Issue one MDIO command and wait for the busy bit to clear.
fn mdio_command(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    cmd: u32,
    settle: bool,
) -> Result<u32, ElinkDriverErr> {
    let comm = phy.mdio_ctrl + EMAC_REG_EMAC_MDIO_COMM;
    host.reg_write(comm, cmd);

    for _ in 0..MDIO_POLL_COUNT {
        host.udelay(10);

        let val = host.reg_read(comm);
        if val & EMAC_MDIO_COMM_START_BUSY == 0 {
            if settle {
                host.udelay(5);
            }
            return Ok(val);
        }
    }

    log::debug!("elink: MDIO access to phy 0x{:x} timed out", phy.addr);
    host.event_log(EventLog::MdioAccessTimeout);
    Err(ElinkDriverErr::Timeout)
}

#[inline(always)]
fn mdio_addr_field(phy: &Phy, devad: u8) -> u32 {
    ((phy.addr as u32) << 21) | ((devad as u32) << 16)
}

pub fn cl45_write(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    devad: u8,
    reg: u16,
    val: u16,
) -> Result<(), ElinkDriverErr> {
    let saved_mode = mdio_enter_cl45(host, phy);

    let ret = mdio_command(
        host,
        phy,
        mdio_addr_field(phy, devad)
            | reg as u32
            | EMAC_MDIO_COMM_COMMAND_ADDRESS
            | EMAC_MDIO_COMM_START_BUSY,
        true,
    )
    .and_then(|_| {
        mdio_command(
            host,
            phy,
            mdio_addr_field(phy, devad)
                | val as u32
                | EMAC_MDIO_COMM_COMMAND_WRITE_45
                | EMAC_MDIO_COMM_START_BUSY,
            true,
        )
    });

    host.reg_write(phy.mdio_ctrl + EMAC_REG_EMAC_MDIO_MODE, saved_mode);

    ret.map(|_| ())
}

pub fn cl45_read(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    devad: u8,
    reg: u16,
) -> Result<u16, ElinkDriverErr> {
    let saved_mode = mdio_enter_cl45(host, phy);

    let ret = mdio_command(
        host,
        phy,
        mdio_addr_field(phy, devad)
            | reg as u32
            | EMAC_MDIO_COMM_COMMAND_ADDRESS
            | EMAC_MDIO_COMM_START_BUSY,
        true,
    )
    .and_then(|_| {
        mdio_command(
            host,
            phy,
            mdio_addr_field(phy, devad)
                | EMAC_MDIO_COMM_COMMAND_READ_45
                | EMAC_MDIO_COMM_START_BUSY,
            false,
        )
    });

    host.reg_write(phy.mdio_ctrl + EMAC_REG_EMAC_MDIO_MODE, saved_mode);

    ret.map(|val| (val & EMAC_MDIO_COMM_DATA) as u16)
}

pub fn cl45_bits_en(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    devad: u8,
    reg: u16,
    bits: u16,
) -> Result<(), ElinkDriverErr> {
    let val = cl45_read(host, phy, devad, reg)?;
    cl45_write(host, phy, devad, reg, val | bits)
}

pub fn cl45_bits_dis(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    devad: u8,
    reg: u16,
    bits: u16,
) -> Result<(), ElinkDriverErr> {
    let val = cl45_read(host, phy, devad, reg)?;
    cl45_write(host, phy, devad, reg, val & !bits)
}

/// Clause 22 register `reg` of block `bank` on the internal PHY.
pub fn cl22_read(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    bank: u16,
    reg: u16,
) -> Result<u16, ElinkDriverErr> {
    cl45_read(host, phy, phy.def_md_devad, bank + (reg & 0xf))
}

pub fn cl22_write(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    bank: u16,
    reg: u16,
    val: u16,
) -> Result<(), ElinkDriverErr> {
    cl45_write(host, phy, phy.def_md_devad, bank + (reg & 0xf), val)
}

/// calc_ieee_aneg_adv - IEEE pause advertisement for a requested flow control mode
///
/// Follows Table 28B-3 of 802.3ab-1999. The full duplex bit is always advertised.
pub fn calc_ieee_aneg_adv(req_flow_ctrl: FlowCtrl, req_fc_auto_adv: FlowCtrl) -> u16 {
    let mut ieee_fc = MDIO_COMBO_IEEE0_AUTO_NEG_ADV_FULL_DUPLEX;

    match req_flow_ctrl {
        FlowCtrl::Auto => {
            if req_fc_auto_adv == FlowCtrl::Both {
                ieee_fc |= MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_BOTH;
            } else {
                ieee_fc |= MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_ASYMMETRIC;
            }
        }
        FlowCtrl::Tx => ieee_fc |= MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_ASYMMETRIC,
        FlowCtrl::Rx | FlowCtrl::Both => ieee_fc |= MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_BOTH,
        FlowCtrl::None => (),
    }

    ieee_fc
}

/// pause_resolve - Resolve a local/partner pause nibble
///
/// `pause_result` is `{local asym, local pause, partner asym, partner pause}`.
/// Returns `None` when the code leaves the current policy unchanged.
pub fn pause_resolve(pause_result: u32) -> Option<FlowCtrl> {
    match pause_result {
        0xb => Some(FlowCtrl::Tx),
        0xe => Some(FlowCtrl::Rx),
        0x5 | 0x7 | 0xd | 0xf => Some(FlowCtrl::Both),
        _ => None,
    }
}

/// Apply a resolved pause nibble to `vars`, recording the partner's pause bits.
pub fn apply_pause_result(vars: &mut Vars, pause_result: u32) {
    if let Some(flow_ctrl) = pause_resolve(pause_result) {
        vars.flow_ctrl = flow_ctrl;
    }

    if pause_result & (1 << 0) != 0 {
        vars.link_status |= LINK_STATUS_LINK_PARTNER_SYMMETRIC_PAUSE;
    }
    if pause_result & (1 << 1) != 0 {
        vars.link_status |= LINK_STATUS_LINK_PARTNER_ASYMMETRIC_PAUSE;
    }
}

/// format_ver - Render `num` as two dotted groups of hex digits without leading zeros
pub fn format_ver(num: u32, buf: &mut String, max_len: usize) -> Result<(), ElinkDriverErr> {
    if max_len < 10 {
        return Err(ElinkDriverErr::InvalidArgument);
    }

    let mut shift = 32;
    let mut remove_leading_zeros = true;
    while shift > 0 {
        shift -= 4;
        let digit = (num >> shift) & 0xf;
        if digit == 0 && remove_leading_zeros {
            continue;
        }

        buf.push(char::from_digit(digit, 16).unwrap_or('?'));
        remove_leading_zeros = false;

        if shift == 16 {
            buf.push('.');
            remove_leading_zeros = true;
        }
    }

    Ok(())
}

pub fn null_format_ver(
    _raw_ver: u32,
    _buf: &mut String,
    _max_len: usize,
) -> Result<(), ElinkDriverErr> {
    Ok(())
}

/// Store a firmware version into the shared memory word of the PHY.
pub fn save_spirom_version(host: &mut dyn ElinkHost, port: u8, spirom_ver: u32, ver_addr: u32) {
    log::debug!(
        "elink: FW version 0x{:x}:0x{:x} for port {}",
        spirom_ver >> 16,
        spirom_ver & 0xffff,
        port
    );

    if ver_addr != 0 {
        host.reg_write(ver_addr, spirom_ver);
    }
}

pub fn save_bcm_spirom_ver(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    port: u8,
) -> Result<(), ElinkDriverErr> {
    let fw_ver1 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_ROM_VER1)? as u32;
    let fw_ver2 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_ROM_VER2)? as u32;
    save_spirom_version(host, port, (fw_ver1 << 16) | fw_ver2, phy.ver_addr);
    Ok(())
}

/// Pulse GPIO1 to reset the external PHYs of a port.
pub fn ext_phy_hw_reset(host: &mut dyn ElinkHost, port: u8) {
    host.gpio_write(MISC_REGISTERS_GPIO_1, GpioMode::OutputLow, port);
    msleep(host, 1);
    host.gpio_write(MISC_REGISTERS_GPIO_1, GpioMode::OutputHigh, port);
}

/// Hold the external PHYs of this port (or path on E2) in reset.
pub fn common_ext_link_reset(params: &Params, host: &mut dyn ElinkHost) {
    let gpio_port = if params.chip_id.is_e2() {
        host.path_id()
    } else {
        params.port
    };

    host.gpio_write(MISC_REGISTERS_GPIO_1, GpioMode::OutputLow, gpio_port);
    host.gpio_write(MISC_REGISTERS_GPIO_2, GpioMode::OutputLow, gpio_port);
    log::debug!("elink: reset external PHY");
}

/// Wait up to a second for the PMA soft reset bit to self clear.
/// Returns the number of milliseconds waited.
pub fn wait_reset_complete(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
) -> Result<u16, ElinkDriverErr> {
    let mut ctrl = 0;
    let mut cnt = 0;
    while cnt < 1000 {
        ctrl = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_CTRL)?;
        if ctrl & (1 << 15) == 0 {
            break;
        }
        msleep(host, 1);
        cnt += 1;
    }

    if cnt == 1000 {
        host.event_log(EventLog::PhyUninitialized { port: params.port });
    }

    log::debug!("elink: control reg 0x{:x} (after {} ms)", ctrl, cnt);
    Ok(cnt)
}

/// Program the clause 45 pause advertisement of an external PHY.
pub fn ext_phy_set_pause(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
    vars: &mut Vars,
) -> Result<(), ElinkDriverErr> {
    let mut val = cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_ADV_PAUSE)?;
    val &= !MDIO_AN_REG_ADV_PAUSE_BOTH;

    vars.ieee_fc = calc_ieee_aneg_adv(phy.req_flow_ctrl, params.req_fc_auto_adv);
    if vars.ieee_fc & MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_ASYMMETRIC
        == MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_ASYMMETRIC
    {
        val |= MDIO_AN_REG_ADV_PAUSE_ASYMMETRIC;
    }
    if vars.ieee_fc & MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_BOTH
        == MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_BOTH
    {
        val |= MDIO_AN_REG_ADV_PAUSE_PAUSE;
    }

    log::debug!("elink: ext phy AN advertize 0x{:x}", val);
    cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_ADV_PAUSE, val)
}

/// ext_phy_resolve_fc - Resolve flow control of an external PHY
///
/// Returns true when the clause 73 pages were consulted.
pub fn ext_phy_resolve_fc(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
    vars: &mut Vars,
) -> Result<bool, ElinkDriverErr> {
    vars.flow_ctrl = FlowCtrl::None;

    if phy.req_flow_ctrl != FlowCtrl::Auto {
        vars.flow_ctrl = phy.req_flow_ctrl;
    } else if phy.req_line_speed != SPEED_AUTO_NEG {
        vars.flow_ctrl = params.req_fc_auto_adv;
    } else if vars.link_status & LINK_STATUS_AUTO_NEGOTIATE_COMPLETE != 0 {
        let ld_pause = cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_ADV_PAUSE)?;
        let lp_pause = cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_LP_AUTO_NEG)?;
        let pause_result = ((ld_pause & MDIO_AN_REG_ADV_PAUSE_MASK) >> 8)
            | ((lp_pause & MDIO_AN_REG_ADV_PAUSE_MASK) >> 10);
        log::debug!("elink: ext PHY pause result 0x{:x}", pause_result);
        apply_pause_result(vars, pause_result as u32);
        return Ok(true);
    }

    Ok(false)
}

pub fn ext_phy_10g_an_resolve(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    vars: &mut Vars,
) -> Result<(), ElinkDriverErr> {
    // Latched, read twice.
    cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_STATUS)?;
    let val = cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_STATUS)?;

    if val & MDIO_AN_REG_STATUS_AN_COMPLETE != 0 {
        vars.link_status |= LINK_STATUS_AUTO_NEGOTIATE_COMPLETE;
    }
    if val & (1 << 0) == 0 {
        vars.link_status |= LINK_STATUS_PARALLEL_DETECTION_USED;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elink::elink_test_host::MockHost;

    fn mdio_phy() -> Phy {
        let mut phy = Phy::template(PhyType::Bcm8705);
        phy.addr = 0x3;
        phy.mdio_ctrl = GRCBASE_EMAC0;
        phy
    }

    #[test]
    fn test_pause_resolve_table() {
        for code in 0..16u32 {
            let expected = match code {
                0xb => Some(FlowCtrl::Tx),
                0xe => Some(FlowCtrl::Rx),
                0x5 | 0x7 | 0xd | 0xf => Some(FlowCtrl::Both),
                _ => None,
            };
            assert_eq!(pause_resolve(code), expected, "code 0x{:x}", code);
        }
    }

    #[test]
    fn test_apply_pause_result_keeps_policy() {
        let mut vars = Vars::new();
        vars.flow_ctrl = FlowCtrl::None;
        apply_pause_result(&mut vars, 0x3);
        assert_eq!(vars.flow_ctrl, FlowCtrl::None);
        assert_ne!(vars.link_status & LINK_STATUS_LINK_PARTNER_SYMMETRIC_PAUSE, 0);
        assert_ne!(vars.link_status & LINK_STATUS_LINK_PARTNER_ASYMMETRIC_PAUSE, 0);

        apply_pause_result(&mut vars, 0xe);
        assert_eq!(vars.flow_ctrl, FlowCtrl::Rx);
    }

    #[test]
    fn test_calc_ieee_aneg_adv() {
        let fd = MDIO_COMBO_IEEE0_AUTO_NEG_ADV_FULL_DUPLEX;
        let both = MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_BOTH;
        let asym = MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_ASYMMETRIC;

        for default in [FlowCtrl::Both, FlowCtrl::Tx] {
            let auto = if default == FlowCtrl::Both { both } else { asym };
            assert_eq!(calc_ieee_aneg_adv(FlowCtrl::Auto, default), fd | auto);
            assert_eq!(calc_ieee_aneg_adv(FlowCtrl::Tx, default), fd | asym);
            assert_eq!(calc_ieee_aneg_adv(FlowCtrl::Rx, default), fd | both);
            assert_eq!(calc_ieee_aneg_adv(FlowCtrl::Both, default), fd | both);
            assert_eq!(calc_ieee_aneg_adv(FlowCtrl::None, default), fd);
        }
    }

    #[test]
    fn test_format_ver() {
        let mut s = String::new();
        format_ver(0x0001_0002, &mut s, 16).unwrap();
        assert_eq!(s, "1.2");

        let mut s = String::new();
        format_ver(0x0a0b_00c1, &mut s, 16).unwrap();
        assert_eq!(s, "a0b.c1");

        let mut s = String::new();
        assert_eq!(
            format_ver(0x1234_5678, &mut s, 9),
            Err(ElinkDriverErr::InvalidArgument)
        );
        assert!(s.is_empty());
    }

    #[test]
    fn test_cl45_read_write() {
        let mut host = MockHost::new();
        let phy = mdio_phy();

        cl45_write(&mut host, &phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_CTRL, 0x2040).unwrap();
        assert_eq!(host.mdio_reg(0x3, MDIO_PMA_DEVAD, MDIO_PMA_REG_CTRL), 0x2040);

        host.set_mdio_reg(0x3, MDIO_AN_DEVAD, MDIO_AN_REG_STATUS, 0x24);
        assert_eq!(
            cl45_read(&mut host, &phy, MDIO_AN_DEVAD, MDIO_AN_REG_STATUS),
            Ok(0x24)
        );

        // The MDIO mode is restored after every access.
        assert_eq!(host.read(GRCBASE_EMAC0 + EMAC_REG_EMAC_MDIO_MODE), 0);
    }

    #[test]
    fn test_cl45_timeout() {
        let mut host = MockHost::new();
        host.mdio_stuck = true;
        let phy = mdio_phy();

        assert_eq!(
            cl45_read(&mut host, &phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_STATUS),
            Err(ElinkDriverErr::Timeout)
        );
        assert!(host.events.contains(&EventLog::MdioAccessTimeout));
        // One address phase, bounded poll, no data phase.
        assert_eq!(host.elapsed_us, 40 + 50 * 10);
    }

    #[test]
    fn test_ext_phy_set_pause() {
        let mut host = MockHost::new();
        let mut phy = mdio_phy();
        phy.req_flow_ctrl = FlowCtrl::Tx;
        let params = Params::new(0, 0, 0);
        let mut vars = Vars::new();

        host.set_mdio_reg(0x3, MDIO_AN_DEVAD, MDIO_AN_REG_ADV_PAUSE, 0x0c01);
        ext_phy_set_pause(&mut host, &phy, &params, &mut vars).unwrap();
        assert_eq!(
            host.mdio_reg(0x3, MDIO_AN_DEVAD, MDIO_AN_REG_ADV_PAUSE),
            0x0801
        );
    }
}
