//! EMAC/BMAC programming, NIG and BRB flow control, ETS arbitration and the
//! persisted link status word.

use super::{
    elink_hw::{
        bits_dis, bits_en, msleep, Duplex, ElinkHost, FlowCtrl, MacType, Params, PfcPortParams,
        PhyModeFlags, SwitchCfg, Vars, SPEED_10, SPEED_100, SPEED_1000, SPEED_10000,
        SPEED_12000, SPEED_13000, SPEED_16000, SPEED_2500,
    },
    elink_regs::*,
    ElinkDriverErr,
};

const MAX_FRAME_SIZE: u32 = ETH_MAX_JUMBO_PACKET_SIZE + ETH_OVERHEAD;

/// Per-priority pause frame counters of the active MAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PfcStatistic {
    pub frames_sent: [u32; 2],
    pub frames_received: [u32; 2],
}

#[inline(always)]
fn emac_base(port: u8) -> u32 {
    if port != 0 {
        GRCBASE_EMAC1
    } else {
        GRCBASE_EMAC0
    }
}

#[inline(always)]
fn bmac_base(port: u8) -> u32 {
    if port != 0 {
        NIG_REG_INGRESS_BMAC1_MEM
    } else {
        NIG_REG_INGRESS_BMAC0_MEM
    }
}

#[inline(always)]
fn port_reg(reg: u32, port: u8) -> u32 {
    reg + port as u32 * 4
}

/// Write one 64 bit BigMAC register.
fn bmac_write(host: &mut dyn ElinkHost, addr: u32, lo: u32) {
    host.reg_block_write(addr, &[lo, 0]);
}

fn bmac_is_out_of_reset(host: &mut dyn ElinkHost, port: u8) -> bool {
    host.reg_read(MISC_REG_RESET_REG_2) & (MISC_REGISTERS_RESET_REG_2_RST_BMAC0 << port) != 0
}

/// Pause frames are passed to the NIG when PFC is on or TX pause was resolved.
fn pause_out_enabled(params: &Params, vars: &Vars) -> u32 {
    (params.feature_config.pfc_enabled || vars.flow_ctrl.tx()) as u32
}

fn mac_addr_words(mac: &[u8; 6]) -> (u32, u32) {
    let hi = ((mac[0] as u32) << 8) | mac[1] as u32;
    let lo = ((mac[2] as u32) << 24)
        | ((mac[3] as u32) << 16)
        | ((mac[4] as u32) << 8)
        | mac[5] as u32;
    (hi, lo)
}

/******************************************************************/
/*                          ETS section                           */
/******************************************************************/

/// ets_disabled - Return the egress arbiter to strict MCP/debug with
/// equally weighted COS0/COS1
pub fn ets_disabled(params: &Params, host: &mut dyn ElinkHost) {
    log::debug!("elink: port {} ETS disabled configuration", params.port);

    // PRI4..PRI0 clients: cos1, cos0, dbg1, dbg0, MCP.
    host.reg_write(NIG_REG_P0_TX_ARB_PRIORITY_CLIENT, 0x4688);

    // MCP and debug are strict.
    host.reg_write(NIG_REG_P0_TX_ARB_CLIENT_IS_STRICT, 0x7);
    host.reg_write(NIG_REG_P0_TX_ARB_CLIENT_IS_SUBJECT2WFQ, 0);
    host.reg_write(NIG_REG_P0_TX_ARB_NUM_STRICT_ARB_SLOTS, 0x100);

    host.reg_write(NIG_REG_P0_TX_ARB_CLIENT_CREDIT_MAP, 0);
    host.reg_write(NIG_REG_P0_TX_ARB_CREDIT_WEIGHT_0, 0);
    host.reg_write(NIG_REG_P0_TX_ARB_CREDIT_WEIGHT_1, 0);
    host.reg_write(NIG_REG_P0_TX_ARB_CREDIT_UPPER_BOUND_0, 0);
    host.reg_write(NIG_REG_P0_TX_ARB_CREDIT_UPPER_BOUND_1, 0);

    host.reg_write(PBF_REG_HIGH_PRIORITY_COS_NUM, 0);
    host.reg_write(PBF_REG_ETS_ENABLED, 0);
    host.reg_write(PBF_REG_COS0_WEIGHT, 0x2710);
    host.reg_write(PBF_REG_COS1_WEIGHT, 0x2710);
    host.reg_write(PBF_REG_COS0_UPPER_BOUND, 0x989680);
    host.reg_write(PBF_REG_COS1_UPPER_BOUND, 0x989680);
    host.reg_write(PBF_REG_NUM_STRICT_ARB_SLOTS, 0);
}

fn ets_bw_limit_common(host: &mut dyn ElinkHost) {
    // COS0 and COS1 take part in WFQ.
    host.reg_write(NIG_REG_P0_TX_ARB_CLIENT_IS_SUBJECT2WFQ, 0x18);

    // Credit weight registers to clients: cos1, cos0, dbg1, dbg0, MCP.
    host.reg_write(NIG_REG_P0_TX_ARB_CLIENT_CREDIT_MAP, 0x111a);

    host.reg_write(
        NIG_REG_P0_TX_ARB_CREDIT_UPPER_BOUND_0,
        ETS_BW_LIMIT_CREDIT_UPPER_BOUND,
    );
    host.reg_write(
        NIG_REG_P0_TX_ARB_CREDIT_UPPER_BOUND_1,
        ETS_BW_LIMIT_CREDIT_UPPER_BOUND,
    );

    host.reg_write(PBF_REG_ETS_ENABLED, 1);
    host.reg_write(PBF_REG_NUM_STRICT_ARB_SLOTS, 0);

    // MCP and debug stay strict.
    host.reg_write(NIG_REG_P0_TX_ARB_CLIENT_IS_STRICT, 0x7);

    host.reg_write(PBF_REG_COS0_UPPER_BOUND, ETS_BW_LIMIT_CREDIT_UPPER_BOUND);
    host.reg_write(PBF_REG_COS1_UPPER_BOUND, ETS_BW_LIMIT_CREDIT_UPPER_BOUND);
}

/// ets_bw_limit - Split the egress bandwidth between COS0 and COS1
///
/// Nothing is programmed unless both classes have a share.
pub fn ets_bw_limit(
    params: &Params,
    cos0_bw: u32,
    cos1_bw: u32,
    host: &mut dyn ElinkHost,
) -> Result<(), ElinkDriverErr> {
    log::debug!("elink: port {} ETS enabled BW limit configuration", params.port);

    let total_bw = cos0_bw.saturating_add(cos1_bw);
    if total_bw == 0 || cos0_bw == 0 || cos1_bw == 0 {
        log::debug!("elink: total BW can't be zero");
        return Err(ElinkDriverErr::InvalidArgument);
    }

    let weight = |bw: u32| (bw as u64 * ETS_BW_LIMIT_CREDIT_WEIGHT as u64 / total_bw as u64) as u32;
    let cos0_credit_weight = weight(cos0_bw);
    let cos1_credit_weight = weight(cos1_bw);

    ets_bw_limit_common(host);

    host.reg_write(NIG_REG_P0_TX_ARB_CREDIT_WEIGHT_0, cos0_credit_weight);
    host.reg_write(NIG_REG_P0_TX_ARB_CREDIT_WEIGHT_1, cos1_credit_weight);

    host.reg_write(PBF_REG_COS0_WEIGHT, cos0_credit_weight);
    host.reg_write(PBF_REG_COS1_WEIGHT, cos1_credit_weight);

    Ok(())
}

/// ets_strict - Give one class strict priority over the other
pub fn ets_strict(
    params: &Params,
    strict_cos: u8,
    host: &mut dyn ElinkHost,
) -> Result<(), ElinkDriverErr> {
    log::debug!("elink: port {} ETS enabled strict configuration", params.port);

    // Everything is strict.
    host.reg_write(NIG_REG_P0_TX_ARB_CLIENT_IS_STRICT, 0x1f);
    host.reg_write(NIG_REG_P0_TX_ARB_NUM_STRICT_ARB_SLOTS, 0x100);

    host.reg_write(PBF_REG_ETS_ENABLED, 0);
    host.reg_write(PBF_REG_NUM_STRICT_ARB_SLOTS, 0x100);
    host.reg_write(PBF_REG_HIGH_PRIORITY_COS_NUM, strict_cos as u32);

    // PRI4..PRI0 clients: dbg0, dbg1, then the strict COS above the other one, MCP.
    let val = if strict_cos == 0 { 0x2318 } else { 0x22e0 };
    host.reg_write(NIG_REG_P0_TX_ARB_PRIORITY_CLIENT, val);

    Ok(())
}

/******************************************************************/
/*                          PFC section                           */
/******************************************************************/

fn bmac2_get_pfc_stat(host: &mut dyn ElinkHost, params: &Params, stat: &mut PfcStatistic) {
    let bmac_addr = bmac_base(params.port);

    log::debug!("elink: pfc statistic read from BMAC");

    host.reg_block_read(bmac_addr + BIGMAC2_REGISTER_TX_STAT_GTPP, &mut stat.frames_sent);
    host.reg_block_read(
        bmac_addr + BIGMAC2_REGISTER_RX_STAT_GRPP,
        &mut stat.frames_received,
    );
}

fn emac_get_pfc_stat(host: &mut dyn ElinkHost, params: &Params, stat: &mut PfcStatistic) {
    let base = emac_base(params.port);

    log::debug!("elink: pfc statistic read from EMAC");

    let xoff = host.reg_read(base + EMAC_REG_RX_PFC_STATS_XOFF_RCVD) & EMAC_REG_RX_PFC_STATS_COUNT;
    let xon = host.reg_read(base + EMAC_REG_RX_PFC_STATS_XON_RCVD) & EMAC_REG_RX_PFC_STATS_COUNT;
    stat.frames_received[0] = xon + xoff;

    let xoff = host.reg_read(base + EMAC_REG_RX_PFC_STATS_XOFF_SENT) & EMAC_REG_RX_PFC_STATS_COUNT;
    let xon = host.reg_read(base + EMAC_REG_RX_PFC_STATS_XON_SENT) & EMAC_REG_RX_PFC_STATS_COUNT;
    stat.frames_sent[0] = xon + xoff;
}

/// pfc_statistic - Read the PFC frame counters of the MAC carrying the link
///
/// Returns `None` while the link is down.
pub fn pfc_statistic(
    params: &Params,
    vars: &Vars,
    host: &mut dyn ElinkHost,
) -> Option<PfcStatistic> {
    if !vars.link_up {
        return None;
    }

    let mut stat = PfcStatistic::default();
    if bmac_is_out_of_reset(host, params.port) {
        bmac2_get_pfc_stat(host, params, &mut stat);
    } else {
        emac_get_pfc_stat(host, params, &mut stat);
    }

    Some(stat)
}

fn update_pfc_bmac1(host: &mut dyn ElinkHost, params: &Params, vars: &Vars) {
    let bmac_addr = bmac_base(params.port);
    let pfc = params.feature_config.pfc_enabled;

    let mut val = 0x14;
    if !pfc && vars.flow_ctrl.rx() {
        // React on received pause frames.
        val |= 1 << 5;
    }
    bmac_write(host, bmac_addr + BIGMAC_REGISTER_RX_CONTROL, val);

    let mut val = 0xc0;
    if !pfc && vars.flow_ctrl.tx() {
        val |= 0x800000;
    }
    bmac_write(host, bmac_addr + BIGMAC_REGISTER_TX_CONTROL, val);
}

fn update_pfc_bmac2(host: &mut dyn ElinkHost, params: &Params, vars: &Vars, is_lb: bool) {
    let bmac_addr = bmac_base(params.port);
    let pfc = params.feature_config.pfc_enabled;

    // Strip CRC and relay control frames to the host.
    let mut val = 0x14;
    if !pfc && vars.flow_ctrl.rx() {
        val |= 1 << 5;
    }
    bmac_write(host, bmac_addr + BIGMAC2_REGISTER_RX_CONTROL, val);
    host.udelay(30);

    let mut val = 0xc0;
    if !pfc && vars.flow_ctrl.tx() {
        val |= 0x800000;
    }
    bmac_write(host, bmac_addr + BIGMAC2_REGISTER_TX_CONTROL, val);

    let pfc_control = if pfc {
        log::debug!("elink: PFC is enabled");

        // RX, TX, forced initial XON, 8 COS and statistics.
        let val = (1 << 0) | (1 << 1) | (1 << 2) | (1 << 3) | (1 << 5);
        bmac_write(host, bmac_addr + BIGMAC2_REGISTER_PFC_CONTROL, val);

        val & !(1 << 2)
    } else {
        log::debug!("elink: PFC is disabled");
        0x8
    };
    bmac_write(host, bmac_addr + BIGMAC2_REGISTER_PFC_CONTROL, pfc_control);

    // Resend per priority pause every 0x8000 * 512 bit times while asserted.
    let mut val = 0x8000;
    if pfc {
        val |= 1 << 16;
    }
    bmac_write(host, bmac_addr + BIGMAC2_REGISTER_TX_PAUSE_CONTROL, val);

    // RX and TX enable.
    let mut val = 0x3;
    if is_lb {
        log::debug!("elink: enable bmac loopback");
        val |= 0x4;
    }
    if pfc {
        // Pass pause frames up to the NIG.
        val |= (1 << 6) | (1 << 5);
    }
    bmac_write(host, bmac_addr + BIGMAC2_REGISTER_BMAC_CONTROL, val);
}

fn update_pfc_brb(host: &mut dyn ElinkHost, params: &Params, pfc_params: Option<&PfcPortParams>) {
    let pauseable = (
        PFC_BRB_MAC_PAUSE_XOFF_THRESHOLD_PAUSEABLE,
        PFC_BRB_MAC_PAUSE_XON_THRESHOLD_PAUSEABLE,
        PFC_BRB_MAC_FULL_XOFF_THRESHOLD_PAUSEABLE,
        PFC_BRB_MAC_FULL_XON_THRESHOLD_PAUSEABLE,
    );
    let non_pauseable = (
        PFC_BRB_MAC_PAUSE_XOFF_THRESHOLD_NON_PAUSEABLE,
        PFC_BRB_MAC_PAUSE_XON_THRESHOLD_NON_PAUSEABLE,
        PFC_BRB_MAC_FULL_XOFF_THRESHOLD_NON_PAUSEABLE,
        PFC_BRB_MAC_FULL_XON_THRESHOLD_NON_PAUSEABLE,
    );

    let pfc_params = pfc_params.filter(|_| params.feature_config.pfc_enabled);

    let cos0 = match pfc_params {
        Some(p) if !p.cos0_pauseable => non_pauseable,
        _ => pauseable,
    };
    host.reg_write(BRB1_REG_PAUSE_0_XOFF_THRESHOLD_0, cos0.0);
    host.reg_write(BRB1_REG_PAUSE_0_XON_THRESHOLD_0, cos0.1);
    host.reg_write(BRB1_REG_FULL_0_XOFF_THRESHOLD_0, cos0.2);
    host.reg_write(BRB1_REG_FULL_0_XON_THRESHOLD_0, cos0.3);

    if let Some(p) = pfc_params {
        let cos1 = if p.cos1_pauseable {
            pauseable
        } else {
            non_pauseable
        };
        host.reg_write(BRB1_REG_PAUSE_1_XOFF_THRESHOLD_0, cos1.0);
        host.reg_write(BRB1_REG_PAUSE_1_XON_THRESHOLD_0, cos1.1);
        host.reg_write(BRB1_REG_FULL_1_XOFF_THRESHOLD_0, cos1.2);
        host.reg_write(BRB1_REG_FULL_1_XON_THRESHOLD_0, cos1.3);
    }
}

fn update_pfc_nig(
    host: &mut dyn ElinkHost,
    params: &Params,
    vars: &Vars,
    nig_params: Option<&PfcPortParams>,
) {
    let port = params.port;
    let p1 = port != 0;
    let pick = |r0: u32, r1: u32| if p1 { r1 } else { r0 };

    log::debug!("elink: updating pfc nig parameters");

    let xcm_mask_reg = pick(NIG_REG_LLH0_XCM_MASK, NIG_REG_LLH1_XCM_MASK);
    let bcn = pick(
        NIG_LLH0_XCM_MASK_REG_LLH0_XCM_MASK_BCN,
        NIG_LLH1_XCM_MASK_REG_LLH1_XCM_MASK_BCN,
    );
    let mut xcm_mask = host.reg_read(xcm_mask_reg);

    let mut pause_enable = 0;
    let mut llfc_out_en = 0;
    let mut llfc_enable = 0;
    let ppp_enable;
    let xcm0_out_en;
    let p0_hwpfc_enable;

    // PFC overrides the NIG parameters so that PFC to SAFC transitions work.
    if params.feature_config.pfc_enabled {
        ppp_enable = 1;
        xcm_mask &= !bcn;
        xcm0_out_en = 0;
        p0_hwpfc_enable = 1;
    } else {
        match nig_params {
            Some(p) => {
                llfc_out_en = p.llfc_out_en;
                llfc_enable = p.llfc_enable;
                pause_enable = p.pause_enable;
            }
            None => pause_enable = 1,
        }
        ppp_enable = 0;
        xcm_mask |= bcn;
        xcm0_out_en = 1;
        p0_hwpfc_enable = 0;
    }

    host.reg_write(pick(NIG_REG_LLFC_OUT_EN_0, NIG_REG_LLFC_OUT_EN_1), llfc_out_en);
    host.reg_write(pick(NIG_REG_LLFC_ENABLE_0, NIG_REG_LLFC_ENABLE_1), llfc_enable);
    host.reg_write(pick(NIG_REG_PAUSE_ENABLE_0, NIG_REG_PAUSE_ENABLE_1), pause_enable);
    host.reg_write(pick(NIG_REG_PPP_ENABLE_0, NIG_REG_PPP_ENABLE_1), ppp_enable);
    host.reg_write(xcm_mask_reg, xcm_mask);

    host.reg_write(NIG_REG_LLFC_EGRESS_SRC_ENABLE_0, 0x7);
    host.reg_write(NIG_REG_XCM0_OUT_EN, xcm0_out_en);
    host.reg_write(NIG_REG_P0_HWPFC_ENABLE, p0_hwpfc_enable);

    // 1 selects the EMAC, 0 the BMAC.
    let val = (vars.mac_type == MacType::Emac) as u32;
    host.reg_write(NIG_REG_EGRESS_EMAC0_PORT, val);

    let mut pkt_priority_to_cos = 0;
    if let Some(p) = nig_params {
        pkt_priority_to_cos = p.pkt_priority_to_cos;

        host.reg_write(
            pick(
                NIG_REG_P0_RX_COS0_PRIORITY_MASK,
                NIG_REG_P1_RX_COS0_PRIORITY_MASK,
            ),
            p.rx_cos0_priority_mask,
        );
        host.reg_write(
            pick(
                NIG_REG_P0_RX_COS1_PRIORITY_MASK,
                NIG_REG_P1_RX_COS1_PRIORITY_MASK,
            ),
            p.rx_cos1_priority_mask,
        );
        host.reg_write(
            pick(
                NIG_REG_LLFC_HIGH_PRIORITY_CLASSES_0,
                NIG_REG_LLFC_HIGH_PRIORITY_CLASSES_1,
            ),
            p.llfc_high_priority_classes,
        );
        host.reg_write(
            pick(
                NIG_REG_LLFC_LOW_PRIORITY_CLASSES_0,
                NIG_REG_LLFC_LOW_PRIORITY_CLASSES_1,
            ),
            p.llfc_low_priority_classes,
        );
    }
    host.reg_write(
        pick(
            NIG_REG_P0_PKT_PRIORITY_TO_COS,
            NIG_REG_P1_PKT_PRIORITY_TO_COS,
        ),
        pkt_priority_to_cos,
    );
}

/// update_pfc - Reprogram pause/PFC without taking the link down
///
/// PFC and 802.3x pause exclude each other. The NIG goes first, then the
/// BRB thresholds, then the MAC carrying the link if there is one.
pub fn update_pfc(
    params: &Params,
    vars: &mut Vars,
    pfc_params: Option<&PfcPortParams>,
    host: &mut dyn ElinkHost,
) {
    update_pfc_nig(host, params, vars, pfc_params);
    update_pfc_brb(host, params, pfc_params);

    if !vars.link_up {
        return;
    }

    if !bmac_is_out_of_reset(host, params.port) {
        log::debug!("elink: about to update PFC in EMAC");
        emac_enable(host, params, vars, false);
        return;
    }

    log::debug!("elink: about to update PFC in BMAC");
    if params.chip_id.is_e2() {
        let bmac_loopback = params.loopback_mode == super::LoopbackMode::Bmac;
        update_pfc_bmac2(host, params, vars, bmac_loopback);
    } else {
        update_pfc_bmac1(host, params, vars);
    }

    let val = pause_out_enabled(params, vars);
    host.reg_write(port_reg(NIG_REG_BMAC0_PAUSE_OUT_EN, params.port), val);
}

/******************************************************************/
/*                        MAC/PBF section                         */
/******************************************************************/

/// Reset the EMAC core and load the station address.
pub fn emac_init(host: &mut dyn ElinkHost, params: &Params) {
    let port = params.port;
    let base = emac_base(port);

    host.reg_write(
        GRCBASE_MISC + MISC_REGISTERS_RESET_REG_2_CLEAR,
        MISC_REGISTERS_RESET_REG_2_RST_EMAC0_HARD_CORE << port,
    );
    host.udelay(5);
    host.reg_write(
        GRCBASE_MISC + MISC_REGISTERS_RESET_REG_2_SET,
        MISC_REGISTERS_RESET_REG_2_RST_EMAC0_HARD_CORE << port,
    );

    // Self clearing reset.
    let val = host.reg_read(base + EMAC_REG_EMAC_MODE);
    host.reg_write(base + EMAC_REG_EMAC_MODE, val | EMAC_MODE_RESET);

    let mut timeout = 200;
    loop {
        let val = host.reg_read(base + EMAC_REG_EMAC_MODE);
        if val & EMAC_MODE_RESET == 0 {
            break;
        }
        if timeout == 0 {
            log::debug!("elink: EMAC timeout");
            return;
        }
        timeout -= 1;
    }

    let (hi, lo) = mac_addr_words(&params.mac_addr);
    host.reg_write(base + EMAC_REG_EMAC_MAC_MATCH, hi);
    host.reg_write(base + EMAC_REG_EMAC_MAC_MATCH + 4, lo);
}

/// emac_enable - Route the port through the EMAC and program pause, PFC and loopback
pub fn emac_enable(host: &mut dyn ElinkHost, params: &Params, vars: &mut Vars, lb: bool) {
    let port = params.port;
    let base = emac_base(port);
    let chip_id = params.chip_id;
    let pfc = params.feature_config.pfc_enabled;

    log::debug!("elink: enabling EMAC");

    // EMAC, not BMAC.
    host.reg_write(port_reg(NIG_REG_EGRESS_EMAC0_PORT, port), 1);

    if chip_id.is_emul() {
        // Lane 1 of 0-3.
        host.reg_write(port_reg(NIG_REG_XGXS_LANE_SEL_P0, port), 1);
        host.reg_write(port_reg(NIG_REG_XGXS_SERDES0_MODE_SEL, port), 1);
    } else if chip_id.is_fpga() {
        log::debug!("elink: emac_enable: setting FPGA");
        host.reg_write(port_reg(NIG_REG_XGXS_LANE_SEL_P0, port), 1);
        host.reg_write(port_reg(NIG_REG_XGXS_SERDES0_MODE_SEL, port), 0);
    } else if vars.phy_flags.contains(PhyModeFlags::XGXS) {
        log::debug!("elink: XGXS");
        host.reg_write(
            port_reg(NIG_REG_XGXS_LANE_SEL_P0, port),
            params.master_lane() as u32,
        );
        host.reg_write(port_reg(NIG_REG_XGXS_SERDES0_MODE_SEL, port), 1);
    } else {
        log::debug!("elink: SerDes");
        host.reg_write(port_reg(NIG_REG_XGXS_SERDES0_MODE_SEL, port), 0);
    }

    bits_en(host, base + EMAC_REG_EMAC_RX_MODE, EMAC_RX_MODE_RESET);
    bits_en(host, base + EMAC_REG_EMAC_TX_MODE, EMAC_TX_MODE_RESET);

    if chip_id.is_emul() || chip_id.is_fpga() {
        bits_en(host, base + EMAC_REG_EMAC_MODE, EMAC_MODE_PORT_GMII);
    } else {
        bits_dis(host, base + EMAC_REG_EMAC_RX_MODE, EMAC_RX_MODE_FLOW_EN);
        bits_dis(
            host,
            base + EMAC_REG_EMAC_TX_MODE,
            EMAC_TX_MODE_EXT_PAUSE_EN | EMAC_TX_MODE_FLOW_EN,
        );

        if !pfc {
            if vars.flow_ctrl.rx() {
                bits_en(host, base + EMAC_REG_EMAC_RX_MODE, EMAC_RX_MODE_FLOW_EN);
            }
            if vars.flow_ctrl.tx() {
                bits_en(
                    host,
                    base + EMAC_REG_EMAC_TX_MODE,
                    EMAC_TX_MODE_EXT_PAUSE_EN | EMAC_TX_MODE_FLOW_EN,
                );
            }
        } else {
            bits_en(host, base + EMAC_REG_EMAC_TX_MODE, EMAC_TX_MODE_FLOW_EN);
        }
    }

    let mut rx_mode = host.reg_read(base + EMAC_REG_EMAC_RX_MODE);
    rx_mode |= EMAC_RX_MODE_KEEP_VLAN_TAG | EMAC_RX_MODE_PROMISCUOUS;

    // Start from XON before PFC is turned back on.
    host.reg_write(base + EMAC_REG_RX_PFC_MODE, 0);
    if pfc {
        log::debug!("elink: PFC is enabled");
        host.reg_write(
            base + EMAC_REG_RX_PFC_MODE,
            EMAC_REG_RX_PFC_MODE_RX_EN
                | EMAC_REG_RX_PFC_MODE_TX_EN
                | EMAC_REG_RX_PFC_MODE_PRIORITIES,
        );
        host.reg_write(
            base + EMAC_REG_RX_PFC_PARAM,
            (0x0101 << EMAC_REG_RX_PFC_PARAM_OPCODE_BITSHIFT)
                | (0x00ff << EMAC_REG_RX_PFC_PARAM_PRIORITY_EN_BITSHIFT),
        );
        rx_mode |= EMAC_RX_MODE_KEEP_MAC_CONTROL;
    }
    host.reg_write(base + EMAC_REG_EMAC_RX_MODE, rx_mode);

    let mut mode = host.reg_read(base + EMAC_REG_EMAC_MODE);
    if lb {
        mode |= EMAC_MODE_LOOPBACK;
    } else {
        mode &= !EMAC_MODE_LOOPBACK;
    }
    host.reg_write(base + EMAC_REG_EMAC_MODE, mode);

    host.reg_write(port_reg(NIG_REG_NIG_EMAC0_EN, port), 1);

    host.reg_write(
        base + EMAC_REG_EMAC_RX_MTU_SIZE,
        EMAC_RX_MTU_SIZE_JUMBO_ENA | MAX_FRAME_SIZE,
    );

    // Strip CRC.
    host.reg_write(port_reg(NIG_REG_NIG_INGRESS_EMAC0_NO_CRC, port), 1);

    host.reg_write(port_reg(NIG_REG_BMAC0_IN_EN, port), 0);
    host.reg_write(port_reg(NIG_REG_BMAC0_PAUSE_OUT_EN, port), 0);
    host.reg_write(port_reg(NIG_REG_BMAC0_OUT_EN, port), 0);

    host.reg_write(port_reg(NIG_REG_EMAC0_IN_EN, port), 1);
    host.reg_write(
        port_reg(NIG_REG_EMAC0_PAUSE_OUT_EN, port),
        pause_out_enabled(params, vars),
    );
    host.reg_write(port_reg(NIG_REG_EGRESS_EMAC0_OUT_EN, port), 1);

    if chip_id.is_emul() {
        // The BigMAC registers stay reachable on emulation.
        host.reg_write(
            GRCBASE_MISC + MISC_REGISTERS_RESET_REG_2_SET,
            MISC_REGISTERS_RESET_REG_2_RST_BMAC0 << port,
        );
        host.reg_write(port_reg(NIG_REG_BMAC0_REGS_OUT_EN, port), 1);
    } else {
        host.reg_write(port_reg(NIG_REG_BMAC0_REGS_OUT_EN, port), 0);
    }

    vars.mac_type = MacType::Emac;
}

/// emac_program - Load the resolved speed and duplex into the EMAC mode register
pub fn emac_program(
    host: &mut dyn ElinkHost,
    params: &Params,
    vars: &Vars,
) -> Result<(), ElinkDriverErr> {
    let mode_reg = emac_base(params.port) + EMAC_REG_EMAC_MODE;

    log::debug!("elink: setting link speed & duplex");
    bits_dis(
        host,
        mode_reg,
        EMAC_MODE_25G_MODE | EMAC_MODE_PORT_MII_10M | EMAC_MODE_HALF_DUPLEX,
    );

    let mut mode = match vars.line_speed {
        SPEED_10 => EMAC_MODE_PORT_MII_10M,
        SPEED_100 => EMAC_MODE_PORT_MII,
        SPEED_1000 => EMAC_MODE_PORT_GMII,
        SPEED_2500 => EMAC_MODE_25G_MODE | EMAC_MODE_PORT_GMII,
        speed => {
            // 10G and above belongs to the BMAC.
            log::debug!("elink: invalid line_speed 0x{:x}", speed);
            return Err(ElinkDriverErr::UnsupportedConfiguration);
        }
    };

    if vars.duplex == Duplex::Half {
        mode |= EMAC_MODE_HALF_DUPLEX;
    }
    bits_en(host, mode_reg, mode);

    Ok(())
}

fn bmac1_enable(host: &mut dyn ElinkHost, params: &Params, vars: &Vars, is_lb: bool) {
    let bmac_addr = bmac_base(params.port);

    log::debug!("elink: enabling BigMAC1");

    // XGXS control.
    bmac_write(host, bmac_addr + BIGMAC_REGISTER_BMAC_XGXS_CONTROL, 0x3c);

    let (hi, lo) = mac_addr_words(&params.mac_addr);
    host.reg_block_write(bmac_addr + BIGMAC_REGISTER_TX_SOURCE_ADDR, &[lo, hi]);

    let mut val = 0x3;
    if is_lb {
        val |= 0x4;
        log::debug!("elink: enable bmac loopback");
    }
    bmac_write(host, bmac_addr + BIGMAC_REGISTER_BMAC_CONTROL, val);

    bmac_write(host, bmac_addr + BIGMAC_REGISTER_RX_MAX_SIZE, MAX_FRAME_SIZE);

    update_pfc_bmac1(host, params, vars);

    bmac_write(host, bmac_addr + BIGMAC_REGISTER_TX_MAX_SIZE, MAX_FRAME_SIZE);
    bmac_write(host, bmac_addr + BIGMAC_REGISTER_CNT_MAX_SIZE, MAX_FRAME_SIZE);

    // SAFC.
    bmac_write(host, bmac_addr + BIGMAC_REGISTER_RX_LLFC_MSG_FLDS, 0x1000200);

    if params.chip_id.is_emul() {
        bmac_write(host, bmac_addr + BIGMAC_REGISTER_TX_PAUSE_THRESHOLD, 0xf000);
    }
}

fn bmac2_enable(host: &mut dyn ElinkHost, params: &Params, vars: &Vars, is_lb: bool) {
    let bmac_addr = bmac_base(params.port);

    log::debug!("elink: enabling BigMAC2");

    bmac_write(host, bmac_addr + BIGMAC2_REGISTER_BMAC_CONTROL, 0);
    host.udelay(30);

    // Reset the PHY, MDIO registers, PLL and BMAC.
    bmac_write(host, bmac_addr + BIGMAC2_REGISTER_BMAC_XGXS_CONTROL, 0x3c);
    host.udelay(30);

    let (hi, lo) = mac_addr_words(&params.mac_addr);
    host.reg_block_write(bmac_addr + BIGMAC2_REGISTER_TX_SOURCE_ADDR, &[lo, hi]);
    host.udelay(30);

    bmac_write(host, bmac_addr + BIGMAC2_REGISTER_RX_LLFC_MSG_FLDS, 0x1000200);
    host.udelay(30);

    bmac_write(host, bmac_addr + BIGMAC2_REGISTER_RX_MAX_SIZE, MAX_FRAME_SIZE);
    host.udelay(30);

    bmac_write(host, bmac_addr + BIGMAC2_REGISTER_TX_MAX_SIZE, MAX_FRAME_SIZE);
    host.udelay(30);

    bmac_write(
        host,
        bmac_addr + BIGMAC2_REGISTER_CNT_MAX_SIZE,
        MAX_FRAME_SIZE - 2,
    );
    host.udelay(30);

    update_pfc_bmac2(host, params, vars, is_lb);
}

/// bmac_enable - Take the BigMAC out of reset and route the port through it
pub fn bmac_enable(host: &mut dyn ElinkHost, params: &Params, vars: &mut Vars, is_lb: bool) {
    let port = params.port;

    host.reg_write(
        GRCBASE_MISC + MISC_REGISTERS_RESET_REG_2_CLEAR,
        MISC_REGISTERS_RESET_REG_2_RST_BMAC0 << port,
    );
    msleep(host, 1);
    host.reg_write(
        GRCBASE_MISC + MISC_REGISTERS_RESET_REG_2_SET,
        MISC_REGISTERS_RESET_REG_2_RST_BMAC0 << port,
    );

    host.reg_write(port_reg(NIG_REG_BMAC0_REGS_OUT_EN, port), 1);

    if params.chip_id.is_e2() {
        bmac2_enable(host, params, vars, is_lb);
    } else {
        bmac1_enable(host, params, vars, is_lb);
    }

    host.reg_write(port_reg(NIG_REG_XGXS_SERDES0_MODE_SEL, port), 1);
    host.reg_write(port_reg(NIG_REG_XGXS_LANE_SEL_P0, port), 0);
    host.reg_write(port_reg(NIG_REG_EGRESS_EMAC0_PORT, port), 0);
    host.reg_write(
        port_reg(NIG_REG_BMAC0_PAUSE_OUT_EN, port),
        pause_out_enabled(params, vars),
    );
    host.reg_write(port_reg(NIG_REG_EGRESS_EMAC0_OUT_EN, port), 0);
    host.reg_write(port_reg(NIG_REG_EMAC0_IN_EN, port), 0);
    host.reg_write(port_reg(NIG_REG_EMAC0_PAUSE_OUT_EN, port), 0);
    host.reg_write(port_reg(NIG_REG_BMAC0_IN_EN, port), 1);
    host.reg_write(port_reg(NIG_REG_BMAC0_OUT_EN, port), 1);

    vars.mac_type = MacType::Bmac;
}

/// bmac_rx_disable - Clear only the RX enable bit of an active BigMAC
pub fn bmac_rx_disable(host: &mut dyn ElinkHost, params: &Params) {
    let port = params.port;
    let bmac_addr = bmac_base(port);
    let nig_bmac_enable = host.reg_read(port_reg(NIG_REG_BMAC0_REGS_OUT_EN, port));

    if !bmac_is_out_of_reset(host, port) || nig_bmac_enable == 0 {
        return;
    }

    let ctrl = if params.chip_id.is_e2() {
        bmac_addr + BIGMAC2_REGISTER_BMAC_CONTROL
    } else {
        bmac_addr + BIGMAC_REGISTER_BMAC_CONTROL
    };

    let mut wb_data = [0; 2];
    host.reg_block_read(ctrl, &mut wb_data);
    wb_data[0] &= !BMAC_CONTROL_RX_ENABLE;
    host.reg_block_write(ctrl, &wb_data);

    msleep(host, 1);
}

/// pbf_update - Reload the transmit credit of the port for a new speed
///
/// Skipped on E2, where the PBF credit is static.
pub fn pbf_update(
    host: &mut dyn ElinkHost,
    params: &Params,
    flow_ctrl: FlowCtrl,
    line_speed: u16,
) -> Result<(), ElinkDriverErr> {
    let port = params.port as u32;

    host.reg_write(PBF_REG_DISABLE_NEW_TASK_PROC_P0 + port * 4, 1);

    let init_crd = host.reg_read(PBF_REG_P0_INIT_CRD + port * 4);
    let mut crd = host.reg_read(PBF_REG_P0_CREDIT + port * 8);
    log::debug!("elink: init_crd 0x{:x} crd 0x{:x}", init_crd, crd);

    let mut count = 1000;
    while init_crd != crd && count > 0 {
        msleep(host, 5);
        crd = host.reg_read(PBF_REG_P0_CREDIT + port * 8);
        count -= 1;
    }

    let crd = host.reg_read(PBF_REG_P0_CREDIT + port * 8);
    if init_crd != crd {
        log::error!("elink: PBF init_crd 0x{:x} != crd 0x{:x}", init_crd, crd);
        return Err(ElinkDriverErr::Timeout);
    }

    let init_crd = if flow_ctrl.rx()
        || matches!(line_speed, SPEED_10 | SPEED_100 | SPEED_1000 | SPEED_2500)
    {
        host.reg_write(PBF_REG_P0_PAUSE_ENABLE + port * 4, 1);
        host.reg_write(PBF_REG_P0_ARB_THRSH + port * 4, 0);
        // 800 - 18 - 4
        778
    } else {
        let thresh = MAX_FRAME_SIZE / 16;
        host.reg_write(PBF_REG_P0_PAUSE_ENABLE + port * 4, 0);
        host.reg_write(PBF_REG_P0_ARB_THRSH + port * 4, thresh);

        match line_speed {
            SPEED_10000 => thresh + 553 - 22,
            SPEED_12000 => thresh + 664 - 22,
            SPEED_13000 => thresh + 742 - 22,
            SPEED_16000 => thresh + 778 - 22,
            _ => {
                log::debug!("elink: invalid line_speed 0x{:x}", line_speed);
                return Err(ElinkDriverErr::UnsupportedConfiguration);
            }
        }
    };

    host.reg_write(PBF_REG_P0_INIT_CRD + port * 4, init_crd);
    log::debug!("elink: PBF updated to speed {} credit {}", line_speed, init_crd);

    // Latch the new credit.
    host.reg_write(PBF_REG_INIT_P0 + port * 4, 1);
    msleep(host, 5);
    host.reg_write(PBF_REG_INIT_P0 + port * 4, 0);

    host.reg_write(PBF_REG_DISABLE_NEW_TASK_PROC_P0 + port * 4, 0);
    Ok(())
}

/// update_mng - Publish `link_status` to the management firmware
pub fn update_mng(host: &mut dyn ElinkHost, params: &Params, link_status: u32) {
    host.reg_write(params.port_mb_addr(SHMEM_PORT_MB_LINK_STATUS), link_status);

    if params.feature_config.bc_supports_vntag {
        host.firmware_command(DRV_MSG_CODE_LINK_STATUS_CHANGED, 0);
    }
}

pub fn set_nig_drain(host: &mut dyn ElinkHost, port: u8, drain: bool) {
    host.reg_write(port_reg(NIG_REG_EGRESS_DRAIN0_MODE, port), drain as u32);
}

pub fn disable_emac(host: &mut dyn ElinkHost, port: u8) {
    host.reg_write(port_reg(NIG_REG_NIG_EMAC0_EN, port), 0);
}

pub fn reset_bmac(host: &mut dyn ElinkHost, port: u8) {
    host.reg_write(
        GRCBASE_MISC + MISC_REGISTERS_RESET_REG_2_CLEAR,
        MISC_REGISTERS_RESET_REG_2_RST_BMAC0 << port,
    );
}

/******************************************************************/
/*                    Link interrupt section                      */
/******************************************************************/

pub const NIG_MASK_ALL_LINK: u32 = NIG_MASK_XGXS0_LINK_STATUS
    | NIG_MASK_XGXS0_LINK10G
    | NIG_MASK_SERDES0_LINK_STATUS
    | NIG_MASK_MI_INT;

/// link_int_enable - Unmask the NIG link interrupts of the port
pub fn link_int_enable(host: &mut dyn ElinkHost, params: &Params) {
    let port = params.port as u32;
    let ext_phy = !params.single_media();

    let mut mask = if params.switch_cfg == SwitchCfg::Switch10G {
        log::debug!("elink: enabled XGXS interrupt");
        NIG_MASK_XGXS0_LINK10G | NIG_MASK_XGXS0_LINK_STATUS
    } else {
        log::debug!("elink: enabled SerDes interrupt");
        NIG_MASK_SERDES0_LINK_STATUS
    };
    if ext_phy {
        log::debug!("elink: enabled external phy int");
        mask |= NIG_MASK_MI_INT;
    }

    bits_en(host, NIG_REG_MASK_INTERRUPT_PORT0 + port * 4, mask);

    log::debug!(
        "elink: port {} is_xgxs {} int_status 0x{:x} int_mask 0x{:x}",
        port,
        params.switch_cfg == SwitchCfg::Switch10G,
        host.reg_read(NIG_REG_STATUS_INTERRUPT_PORT0 + port * 4),
        host.reg_read(NIG_REG_MASK_INTERRUPT_PORT0 + port * 4)
    );
}

/// rearm_latch_signal - Re-arm the latched MI interrupt of the port
///
/// `exp_mi_int` keeps the MI status set when the PHY that owns the latch
/// carries the link.
pub fn rearm_latch_signal(host: &mut dyn ElinkHost, port: u8, exp_mi_int: bool) {
    let latch_reg = NIG_REG_LATCH_STATUS_0 + port as u32 * 8;
    let status_reg = port_reg(NIG_REG_STATUS_INTERRUPT_PORT0, port);

    let latch_status = host.reg_read(latch_reg);
    log::debug!("elink: latch_status = 0x{:x}", latch_status);

    if exp_mi_int {
        bits_en(host, status_reg, NIG_STATUS_EMAC0_MI_INT);
    } else {
        bits_dis(host, status_reg, NIG_STATUS_EMAC0_MI_INT);
    }

    if latch_status & 1 != 0 {
        host.reg_write(latch_reg, (latch_status & 0xfffe) | (latch_status & 1));
    }
}

/// link_int_ack - Acknowledge the link change that was just handled
pub fn link_int_ack(host: &mut dyn ElinkHost, params: &Params, vars: &Vars, is_10g: bool) {
    let status_reg = port_reg(NIG_REG_STATUS_INTERRUPT_PORT0, params.port);

    // Only one line is expected to change at a time.
    bits_dis(
        host,
        status_reg,
        NIG_STATUS_XGXS0_LINK10G | NIG_STATUS_XGXS0_LINK_STATUS | NIG_STATUS_SERDES0_LINK_STATUS,
    );

    if !vars.phy_link_up {
        return;
    }

    if is_10g {
        log::debug!("elink: 10G XGXS phy link up");
        bits_en(host, status_reg, NIG_STATUS_XGXS0_LINK10G);
    } else if params.switch_cfg == SwitchCfg::Switch10G {
        let ser_lane = params.master_lane() as u32;
        log::debug!("elink: {} speed XGXS phy link up", vars.line_speed);
        bits_en(
            host,
            status_reg,
            (1 << ser_lane) << NIG_STATUS_XGXS0_LINK_STATUS_SIZE,
        );
    } else {
        log::debug!("elink: SerDes phy link up");
        bits_en(host, status_reg, NIG_STATUS_SERDES0_LINK_STATUS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elink::{elink_hw::ChipId, elink_test_host::MockHost, LoopbackMode};

    const E2_CHIP: ChipId = ChipId(CHIP_NUM_57712 << 16);

    fn link_up_vars(line_speed: u16, flow_ctrl: FlowCtrl) -> Vars {
        let mut vars = Vars::new();
        vars.link_up = true;
        vars.phy_link_up = true;
        vars.line_speed = line_speed;
        vars.flow_ctrl = flow_ctrl;
        vars.phy_flags = PhyModeFlags::XGXS;
        vars
    }

    #[test]
    fn test_ets_bw_limit_zero_guard() {
        let params = Params::new(0, 0, 0);

        for (cos0, cos1) in [(0, 0), (0, 50), (50, 0)] {
            let mut host = MockHost::new();
            assert_eq!(
                ets_bw_limit(&params, cos0, cos1, &mut host),
                Err(ElinkDriverErr::InvalidArgument)
            );
            assert!(host.writes.is_empty());
        }
    }

    #[test]
    fn test_ets_bw_limit_weights() {
        let params = Params::new(0, 0, 0);
        let mut host = MockHost::new();

        ets_bw_limit(&params, 30, 70, &mut host).unwrap();

        let cos0 = 30 * ETS_BW_LIMIT_CREDIT_WEIGHT / 100;
        let cos1 = 70 * ETS_BW_LIMIT_CREDIT_WEIGHT / 100;
        assert_eq!(host.read(NIG_REG_P0_TX_ARB_CREDIT_WEIGHT_0), cos0);
        assert_eq!(host.read(NIG_REG_P0_TX_ARB_CREDIT_WEIGHT_1), cos1);
        assert_eq!(host.read(PBF_REG_COS0_WEIGHT), cos0);
        assert_eq!(host.read(PBF_REG_COS1_WEIGHT), cos1);
        assert_eq!(host.read(PBF_REG_ETS_ENABLED), 1);
        assert_eq!(host.read(NIG_REG_P0_TX_ARB_CLIENT_IS_SUBJECT2WFQ), 0x18);
    }

    #[test]
    fn test_ets_strict_and_disabled() {
        let params = Params::new(0, 0, 0);
        let mut host = MockHost::new();

        ets_strict(&params, 0, &mut host).unwrap();
        assert_eq!(host.read(NIG_REG_P0_TX_ARB_PRIORITY_CLIENT), 0x2318);
        assert_eq!(host.read(NIG_REG_P0_TX_ARB_CLIENT_IS_STRICT), 0x1f);

        ets_strict(&params, 1, &mut host).unwrap();
        assert_eq!(host.read(NIG_REG_P0_TX_ARB_PRIORITY_CLIENT), 0x22e0);
        assert_eq!(host.read(PBF_REG_HIGH_PRIORITY_COS_NUM), 1);

        ets_disabled(&params, &mut host);
        assert_eq!(host.read(NIG_REG_P0_TX_ARB_PRIORITY_CLIENT), 0x4688);
        assert_eq!(host.read(NIG_REG_P0_TX_ARB_CLIENT_IS_STRICT), 0x7);
        assert_eq!(host.read(PBF_REG_ETS_ENABLED), 0);
        assert_eq!(host.read(PBF_REG_HIGH_PRIORITY_COS_NUM), 0);
    }

    #[test]
    fn test_update_pfc_link_down_skips_mac() {
        let mut params = Params::new(1, 0, 0);
        params.feature_config.pfc_enabled = true;
        let mut vars = Vars::new();
        let mut host = MockHost::new();
        host.set(NIG_REG_LLH1_XCM_MASK, NIG_LLH1_XCM_MASK_REG_LLH1_XCM_MASK_BCN);

        let pfc = PfcPortParams {
            cos0_pauseable: false,
            cos1_pauseable: true,
            ..Default::default()
        };
        update_pfc(&params, &mut vars, Some(&pfc), &mut host);

        assert_eq!(host.read(NIG_REG_PPP_ENABLE_1), 1);
        assert_eq!(host.read(NIG_REG_PAUSE_ENABLE_1), 0);
        assert_eq!(host.read(NIG_REG_LLH1_XCM_MASK), 0);
        assert_eq!(host.read(NIG_REG_P0_HWPFC_ENABLE), 1);
        assert_eq!(
            host.read(BRB1_REG_FULL_0_XOFF_THRESHOLD_0),
            PFC_BRB_MAC_FULL_XOFF_THRESHOLD_NON_PAUSEABLE
        );
        assert_eq!(
            host.read(BRB1_REG_FULL_1_XOFF_THRESHOLD_0),
            PFC_BRB_MAC_FULL_XOFF_THRESHOLD_PAUSEABLE
        );

        // No MAC is touched while the link is down.
        assert!(host.writes_to(GRCBASE_EMAC1 + EMAC_REG_RX_PFC_MODE).is_empty());
        assert!(host.writes_to(NIG_REG_BMAC0_PAUSE_OUT_EN + 4).is_empty());
    }

    #[test]
    fn test_update_pfc_order_nig_brb_mac() {
        let mut params = Params::new(0, 0, 0);
        params.chip_id = E2_CHIP;
        let mut vars = link_up_vars(SPEED_10000, FlowCtrl::Both);
        let mut host = MockHost::new();
        host.set(MISC_REG_RESET_REG_2, MISC_REGISTERS_RESET_REG_2_RST_BMAC0);

        update_pfc(&params, &mut vars, None, &mut host);

        let pos = |addr: u32| host.writes.iter().position(|(a, _)| *a == addr).unwrap();
        let nig = pos(NIG_REG_PAUSE_ENABLE_0);
        let brb = pos(BRB1_REG_PAUSE_0_XOFF_THRESHOLD_0);
        let mac = pos(NIG_REG_INGRESS_BMAC0_MEM + BIGMAC2_REGISTER_RX_CONTROL);
        assert!(nig < brb && brb < mac);

        // Plain pause: the BMAC honours both directions.
        assert_eq!(host.read(NIG_REG_PAUSE_ENABLE_0), 1);
        assert_eq!(
            host.read(NIG_REG_INGRESS_BMAC0_MEM + BIGMAC2_REGISTER_RX_CONTROL),
            0x14 | (1 << 5)
        );
        assert_eq!(
            host.read(NIG_REG_INGRESS_BMAC0_MEM + BIGMAC2_REGISTER_TX_CONTROL),
            0xc0 | 0x800000
        );
        assert_eq!(
            host.read(NIG_REG_INGRESS_BMAC0_MEM + BIGMAC2_REGISTER_PFC_CONTROL),
            0x8
        );
        assert_eq!(host.read(NIG_REG_BMAC0_PAUSE_OUT_EN), 1);
    }

    #[test]
    fn test_emac_enable_pause() {
        let mut params = Params::new(0, 0, 0);
        params.lane_config = 2 << PORT_HW_CFG_LANE_SWAP_CFG_MASTER_SHIFT;
        let mut vars = link_up_vars(SPEED_1000, FlowCtrl::Rx);
        let mut host = MockHost::new();

        emac_enable(&mut host, &params, &mut vars, false);

        assert_eq!(vars.mac_type, MacType::Emac);
        assert_eq!(host.read(NIG_REG_XGXS_LANE_SEL_P0), 2);
        let rx_mode = host.read(GRCBASE_EMAC0 + EMAC_REG_EMAC_RX_MODE);
        assert_ne!(rx_mode & EMAC_RX_MODE_FLOW_EN, 0);
        assert_ne!(rx_mode & EMAC_RX_MODE_PROMISCUOUS, 0);
        let tx_mode = host.read(GRCBASE_EMAC0 + EMAC_REG_EMAC_TX_MODE);
        assert_eq!(tx_mode & EMAC_TX_MODE_FLOW_EN, 0);
        assert_eq!(host.read(NIG_REG_EMAC0_PAUSE_OUT_EN), 0);
        assert_eq!(host.read(NIG_REG_NIG_EMAC0_EN), 1);
        assert_eq!(
            host.read(GRCBASE_EMAC0 + EMAC_REG_EMAC_RX_MTU_SIZE),
            EMAC_RX_MTU_SIZE_JUMBO_ENA | MAX_FRAME_SIZE
        );
    }

    #[test]
    fn test_emac_program_speeds() {
        let params = Params::new(1, 0, 0);
        let mut host = MockHost::new();
        let mode_reg = GRCBASE_EMAC1 + EMAC_REG_EMAC_MODE;

        let mut vars = link_up_vars(SPEED_2500, FlowCtrl::None);
        emac_program(&mut host, &params, &vars).unwrap();
        assert_eq!(
            host.read(mode_reg),
            EMAC_MODE_25G_MODE | EMAC_MODE_PORT_GMII
        );

        vars.line_speed = SPEED_100;
        vars.duplex = Duplex::Half;
        emac_program(&mut host, &params, &vars).unwrap();
        assert_eq!(
            host.read(mode_reg) & (EMAC_MODE_25G_MODE | EMAC_MODE_HALF_DUPLEX),
            EMAC_MODE_HALF_DUPLEX
        );

        vars.line_speed = SPEED_10000;
        assert_eq!(
            emac_program(&mut host, &params, &vars),
            Err(ElinkDriverErr::UnsupportedConfiguration)
        );
    }

    #[test]
    fn test_emac_init_loads_mac_address() {
        let mut params = Params::new(0, 0, 0);
        params.mac_addr = [0x00, 0x10, 0x18, 0xaa, 0xbb, 0xcc];
        let mut host = MockHost::new();

        emac_init(&mut host, &params);

        assert_eq!(host.read(GRCBASE_EMAC0 + EMAC_REG_EMAC_MAC_MATCH), 0x0010);
        assert_eq!(
            host.read(GRCBASE_EMAC0 + EMAC_REG_EMAC_MAC_MATCH + 4),
            0x18aabbcc
        );
    }

    #[test]
    fn test_bmac1_enable_loopback() {
        let mut params = Params::new(1, 0, 0);
        params.mac_addr = [0x00, 0x10, 0x18, 0xaa, 0xbb, 0xcc];
        params.loopback_mode = LoopbackMode::Bmac;
        let mut vars = link_up_vars(SPEED_10000, FlowCtrl::Tx);
        let mut host = MockHost::new();

        bmac_enable(&mut host, &params, &mut vars, true);

        let base = NIG_REG_INGRESS_BMAC1_MEM;
        assert_eq!(vars.mac_type, MacType::Bmac);
        assert_eq!(host.read(base + BIGMAC_REGISTER_BMAC_CONTROL), 0x7);
        assert_eq!(host.read(base + BIGMAC_REGISTER_TX_SOURCE_ADDR), 0x18aabbcc);
        assert_eq!(host.read(base + BIGMAC_REGISTER_TX_SOURCE_ADDR + 4), 0x0010);
        assert_eq!(host.read(base + BIGMAC_REGISTER_TX_CONTROL), 0xc0 | 0x800000);
        assert_eq!(host.read(base + BIGMAC_REGISTER_RX_CONTROL), 0x14);
        assert_eq!(host.read(NIG_REG_BMAC0_PAUSE_OUT_EN + 4), 1);
        assert_eq!(host.read(NIG_REG_BMAC0_IN_EN + 4), 1);
        assert_eq!(host.read(NIG_REG_EMAC0_IN_EN + 4), 0);
    }

    #[test]
    fn test_bmac_rx_disable_keeps_other_bits() {
        let mut params = Params::new(0, 0, 0);
        params.chip_id = E2_CHIP;
        let mut host = MockHost::new();
        let ctrl = NIG_REG_INGRESS_BMAC0_MEM + BIGMAC2_REGISTER_BMAC_CONTROL;

        // In reset: nothing happens.
        host.set(ctrl, 0x7);
        host.set(NIG_REG_BMAC0_REGS_OUT_EN, 1);
        bmac_rx_disable(&mut host, &params);
        assert_eq!(host.read(ctrl), 0x7);

        host.set(MISC_REG_RESET_REG_2, MISC_REGISTERS_RESET_REG_2_RST_BMAC0);
        bmac_rx_disable(&mut host, &params);
        assert_eq!(host.read(ctrl), 0x7 & !BMAC_CONTROL_RX_ENABLE);
    }

    #[test]
    fn test_pfc_statistic() {
        let params = Params::new(0, 0, 0);
        let mut host = MockHost::new();
        let mut vars = Vars::new();

        assert_eq!(pfc_statistic(&params, &vars, &mut host), None);

        vars.link_up = true;
        host.set(GRCBASE_EMAC0 + EMAC_REG_RX_PFC_STATS_XOFF_RCVD, 0x1_0003);
        host.set(GRCBASE_EMAC0 + EMAC_REG_RX_PFC_STATS_XON_RCVD, 2);
        host.set(GRCBASE_EMAC0 + EMAC_REG_RX_PFC_STATS_XOFF_SENT, 7);
        let stat = pfc_statistic(&params, &vars, &mut host).unwrap();
        assert_eq!(stat.frames_received, [5, 0]);
        assert_eq!(stat.frames_sent, [7, 0]);

        host.set(MISC_REG_RESET_REG_2, MISC_REGISTERS_RESET_REG_2_RST_BMAC0);
        host.set(NIG_REG_INGRESS_BMAC0_MEM + BIGMAC2_REGISTER_TX_STAT_GTPP, 11);
        host.set(NIG_REG_INGRESS_BMAC0_MEM + BIGMAC2_REGISTER_RX_STAT_GRPP + 4, 1);
        let stat = pfc_statistic(&params, &vars, &mut host).unwrap();
        assert_eq!(stat.frames_sent, [11, 0]);
        assert_eq!(stat.frames_received, [0, 1]);
    }

    #[test]
    fn test_pbf_update() {
        let params = Params::new(0, 0, 0);
        let mut host = MockHost::new();

        pbf_update(&mut host, &params, FlowCtrl::None, SPEED_10000).unwrap();
        let thresh = MAX_FRAME_SIZE / 16;
        assert_eq!(host.read(PBF_REG_P0_ARB_THRSH), thresh);
        assert_eq!(host.read(PBF_REG_P0_INIT_CRD), thresh + 553 - 22);
        assert_eq!(host.writes_to(PBF_REG_INIT_P0), [1, 0]);
        assert_eq!(host.read(PBF_REG_P0_CREDIT), thresh + 553 - 22);
        assert_eq!(host.read(PBF_REG_DISABLE_NEW_TASK_PROC_P0), 0);

        pbf_update(&mut host, &params, FlowCtrl::Rx, SPEED_10000).unwrap();
        assert_eq!(host.read(PBF_REG_P0_PAUSE_ENABLE), 1);
        assert_eq!(host.read(PBF_REG_P0_INIT_CRD), 778);
    }

    #[test]
    fn test_pbf_update_credit_timeout() {
        let params = Params::new(0, 0, 0);
        let mut host = MockHost::new();
        host.set(PBF_REG_P0_INIT_CRD, 100);
        host.set(PBF_REG_P0_CREDIT, 99);

        assert_eq!(
            pbf_update(&mut host, &params, FlowCtrl::None, SPEED_10000),
            Err(ElinkDriverErr::Timeout)
        );
        assert_eq!(host.elapsed_us, 1000 * 5000);
        // The port is left disabled.
        assert_eq!(host.read(PBF_REG_DISABLE_NEW_TASK_PROC_P0), 1);
    }

    #[test]
    fn test_update_mng_notifies_firmware() {
        let mut params = Params::new(1, 0x1000, 0);
        let mut host = MockHost::new();

        update_mng(&mut host, &params, LINK_STATUS_LINK_UP);
        assert_eq!(
            host.read(0x1000 + SHMEM_PORT_MB_LINK_STATUS + SHMEM_PORT_MB_STRIDE),
            LINK_STATUS_LINK_UP
        );
        assert!(host.fw_cmds.is_empty());

        params.feature_config.bc_supports_vntag = true;
        update_mng(&mut host, &params, 0);
        assert_eq!(host.fw_cmds, [(DRV_MSG_CODE_LINK_STATUS_CHANGED, 0)]);
    }

    #[test]
    fn test_link_int_ack() {
        let mut params = Params::new(0, 0, 0);
        params.lane_config = 1 << PORT_HW_CFG_LANE_SWAP_CFG_MASTER_SHIFT;
        let mut host = MockHost::new();
        host.set(NIG_REG_STATUS_INTERRUPT_PORT0, NIG_STATUS_SERDES0_LINK_STATUS);

        let vars = link_up_vars(SPEED_1000, FlowCtrl::None);
        link_int_ack(&mut host, &params, &vars, false);
        assert_eq!(
            host.read(NIG_REG_STATUS_INTERRUPT_PORT0),
            (1 << 1) << NIG_STATUS_XGXS0_LINK_STATUS_SIZE
        );

        link_int_ack(&mut host, &params, &vars, true);
        assert_eq!(
            host.read(NIG_REG_STATUS_INTERRUPT_PORT0),
            ((1 << 1) << NIG_STATUS_XGXS0_LINK_STATUS_SIZE) | NIG_STATUS_XGXS0_LINK10G
        );
    }

    #[test]
    fn test_rearm_latch_signal() {
        let mut host = MockHost::new();
        host.set(NIG_REG_LATCH_STATUS_0 + 8, 0x3);

        rearm_latch_signal(&mut host, 1, true);
        assert_eq!(
            host.read(NIG_REG_STATUS_INTERRUPT_PORT0 + 4) & NIG_STATUS_EMAC0_MI_INT,
            NIG_STATUS_EMAC0_MI_INT
        );
        assert_eq!(host.writes_to(NIG_REG_LATCH_STATUS_0 + 8), [0x3]);

        rearm_latch_signal(&mut host, 1, false);
        assert_eq!(
            host.read(NIG_REG_STATUS_INTERRUPT_PORT0 + 4) & NIG_STATUS_EMAC0_MI_INT,
            0
        );
    }
}
