//! Discovery of the PHYs of a port from the persisted hardware configuration.

use super::{
    elink_hw::{
        link_config_speed, ElinkHost, FlowCtrl, MdioAccess, MultiPhyConfig, Params, Phy,
        PhyFlags, PhyIndex, PhyType, SwitchCfg, MAX_PHYS,
    },
    elink_operations::emac_base,
    elink_regs::*,
    ElinkDriverErr,
};

/// Split the four preemphasis words of a slot into per-lane RX and TX values.
fn populate_preemphasis(host: &mut dyn ElinkHost, params: &Params, phy: &mut Phy, idx: PhyIndex) {
    // The internal PHY and the first external PHY share one set of words.
    let (rx_base, tx_base) = match idx {
        PhyIndex::Internal | PhyIndex::External1 => {
            (SHMEM_PORT_HW_XGXS_CONFIG_RX, SHMEM_PORT_HW_XGXS_CONFIG_TX)
        }
        PhyIndex::External2 => (SHMEM_PORT_HW_XGXS_CONFIG2_RX, SHMEM_PORT_HW_XGXS_CONFIG2_TX),
    };

    for i in 0..2 {
        let rx = host.reg_read(params.port_hw_addr(rx_base + i as u32 * 4));
        let tx = host.reg_read(params.port_hw_addr(tx_base + i as u32 * 4));

        phy.rx_preemphasis[i << 1] = (rx >> 16) as u16;
        phy.rx_preemphasis[(i << 1) + 1] = rx as u16;
        phy.tx_preemphasis[i << 1] = (tx >> 16) as u16;
        phy.tx_preemphasis[(i << 1) + 1] = tx as u16;
    }
}

fn populate_int_phy(host: &mut dyn ElinkHost, params: &mut Params) -> Result<Phy, ElinkDriverErr> {
    let port = params.port as u32;
    let link_config = host.reg_read(params.port_feature_addr(SHMEM_PORT_FEATURE_LINK_CONFIG));
    let switch_cfg = SwitchCfg::from_link_config(link_config);

    let mut phy = match switch_cfg {
        SwitchCfg::Switch1G => {
            let mut phy = Phy::template(PhyType::Serdes);
            phy.addr = host.reg_read(NIG_REG_SERDES0_CTRL_PHY_ADDR + port * 0x10) as u8;
            phy
        }
        SwitchCfg::Switch10G => {
            let mut phy = Phy::template(PhyType::Xgxs);
            phy.addr = host.reg_read(NIG_REG_XGXS0_CTRL_PHY_ADDR + port * 0x18) as u8;
            phy
        }
        _ => {
            log::debug!("elink: invalid switch_cfg {:?}", switch_cfg);
            return Err(ElinkDriverErr::UnsupportedConfiguration);
        }
    };
    params.switch_cfg = switch_cfg;

    phy.mdio_ctrl = emac_base(host, MdioAccess::Both, params.port);
    phy.def_md_devad = if params.chip_id.is_e2() {
        E2_DEFAULT_PHY_DEV_ADDR
    } else {
        DEFAULT_PHY_DEV_ADDR
    };

    log::debug!(
        "elink: internal phy port={}, addr=0x{:x}, mdio_ctl=0x{:x}",
        params.port,
        phy.addr,
        phy.mdio_ctrl
    );

    populate_preemphasis(host, params, &mut phy, PhyIndex::Internal);
    Ok(phy)
}

fn populate_ext_phy(
    host: &mut dyn ElinkHost,
    params: &Params,
    idx: PhyIndex,
) -> Result<Phy, ElinkDriverErr> {
    let ext_phy_config = match idx {
        PhyIndex::External1 => host.reg_read(params.port_hw_addr(SHMEM_PORT_HW_EXT_PHY_CONFIG)),
        PhyIndex::External2 => host.reg_read(params.port_hw_addr(SHMEM_PORT_HW_EXT_PHY_CONFIG2)),
        PhyIndex::Internal => return Err(ElinkDriverErr::InvalidArgument),
    };

    let (phy_type, noc) = PhyType::from_ext_phy_config(ext_phy_config);
    let mut mdio_access = match phy_type {
        PhyType::Failure => {
            log::debug!("elink: phy type failure in slot {:?}", idx);
            return Err(ElinkDriverErr::UnsupportedConfiguration);
        }
        PhyType::NotConnected => return Ok(Phy::null()),
        PhyType::Bcm8073 => MdioAccess::Swapped,
        PhyType::Bcm8726 | PhyType::Bcm8727 => MdioAccess::Emac1,
        _ => MdioAccess::Both,
    };

    let mut phy = Phy::template(phy_type);
    if noc {
        phy.flags |= PhyFlags::NOC;
    }
    phy.addr = ((ext_phy_config & PORT_HW_CFG_XGXS_EXT_PHY_ADDR_MASK)
        >> PORT_HW_CFG_XGXS_EXT_PHY_ADDR_SHIFT) as u8;
    populate_preemphasis(host, params, &mut phy, idx);

    let config2 = host.reg_read(params.shmem_base + SHMEM_SHARED_HW_CONFIG_CONFIG2);
    if idx == PhyIndex::External1 {
        phy.ver_addr = params.port_mb_addr(SHMEM_PORT_MB_EXT_PHY_FW_VERSION);
        if let Some(access) = MdioAccess::from_config2_access1(config2) {
            mdio_access = access;
        }
    } else {
        // Older shmem2 layouts have no room for the second version word.
        let size = host.reg_read(params.shmem2_base + SHMEM2_SIZE);
        if size > SHMEM2_EXT_PHY_FW_VERSION2 {
            phy.ver_addr =
                params.shmem2_base + SHMEM2_EXT_PHY_FW_VERSION2 + params.port as u32 * 4;
        }
        if let Some(access) = MdioAccess::from_config2_access2(config2) {
            mdio_access = access;
        }
    }
    phy.mdio_ctrl = emac_base(host, mdio_access, params.port);

    // A PHY reached through another port's MDIO pins must be accessed under
    // the hardware lock.
    if mdio_access != MdioAccess::Both {
        phy.flags |= PhyFlags::HW_LOCK_REQUIRED;
    }

    log::debug!(
        "elink: phy_type {:?} port {} found in index {:?}, addr=0x{:x}, mdio_ctl=0x{:x}",
        phy_type,
        params.port,
        idx,
        phy.addr,
        phy.mdio_ctrl
    );

    Ok(phy)
}

/// populate_phy - Build the PHY of one slot from the persisted configuration
///
/// Only identity and routing are filled in. Requested link settings are left
/// to `phy_probe`, so path-wide queries can use a scratch `Params`.
pub fn populate_phy(
    host: &mut dyn ElinkHost,
    params: &mut Params,
    idx: PhyIndex,
) -> Result<Phy, ElinkDriverErr> {
    match idx {
        PhyIndex::Internal => populate_int_phy(host, params),
        _ => populate_ext_phy(host, params, idx),
    }
}

/// Requested speed, duplex, pause and capability mask of a logical slot.
fn phy_def_cfg(host: &mut dyn ElinkHost, params: &mut Params, phy: &mut Phy, idx: PhyIndex) {
    let (link_config, cap_mask) = if idx == PhyIndex::External2 {
        (
            host.reg_read(params.port_feature_addr(SHMEM_PORT_FEATURE_LINK_CONFIG2)),
            host.reg_read(params.port_hw_addr(SHMEM_PORT_HW_SPEED_CAP_MASK2)),
        )
    } else {
        (
            host.reg_read(params.port_feature_addr(SHMEM_PORT_FEATURE_LINK_CONFIG)),
            host.reg_read(params.port_hw_addr(SHMEM_PORT_HW_SPEED_CAP_MASK)),
        )
    };

    log::debug!(
        "elink: default config phy idx {:?} cfg 0x{:x} speed_cap_mask 0x{:x}",
        idx,
        link_config,
        cap_mask
    );

    let (req_line_speed, req_duplex) = link_config_speed(link_config);
    let req_flow_ctrl: FlowCtrl = FlowCtrl::from_link_config(link_config);

    phy.speed_cap_mask = cap_mask;
    phy.req_line_speed = req_line_speed;
    phy.req_duplex = req_duplex;
    phy.req_flow_ctrl = req_flow_ctrl;

    let cfg_idx = idx.link_config_idx();
    params.req_line_speed[cfg_idx] = req_line_speed;
    params.req_duplex[cfg_idx] = req_duplex;
    params.req_flow_ctrl[cfg_idx] = req_flow_ctrl;
    params.speed_cap_mask[cfg_idx] = cap_mask;
}

/// Record the media type of a slot unless the management firmware already did.
fn sync_media_type(host: &mut dyn ElinkHost, params: &Params, phy: &Phy, actual: PhyIndex) {
    let sync_offset = params.port_hw_addr(SHMEM_PORT_HW_MEDIA_TYPE);
    let shift = PORT_HW_CFG_MEDIA_TYPE_PHY_SHIFT * actual.idx() as u32;

    let mut media_types = host.reg_read(sync_offset);
    if media_types & (PORT_HW_CFG_MEDIA_TYPE_PHY_MASK << shift) == 0 {
        media_types |= (phy.media_type.as_raw() & PORT_HW_CFG_MEDIA_TYPE_PHY_MASK) << shift;
    }
    host.reg_write(sync_offset, media_types);
}

/// phy_probe - Populate `params.phy` from the persisted configuration
///
/// Slots are filled in order until a slot reports no PHY. With the swap bit
/// set the two external PHYs are stored in each other's slot, while the
/// requested link configuration keeps following the logical role.
/// Returns the number of populated slots.
pub fn phy_probe(params: &mut Params, host: &mut dyn ElinkHost) -> Result<u8, ElinkDriverErr> {
    log::debug!("elink: begin phy probe");

    params.num_phys = 0;
    params.phy = [Phy::null(); MAX_PHYS];
    params.lane_config = host.reg_read(params.port_hw_addr(SHMEM_PORT_HW_LANE_CONFIG));
    params.multi_phy_config =
        MultiPhyConfig::from_raw(host.reg_read(params.port_hw_addr(SHMEM_PORT_HW_MULTI_PHY_CONFIG)));
    let swapped = params.multi_phy_config.swapped;

    for idx in PhyIndex::ALL {
        let actual = idx.swapped(swapped);
        log::debug!(
            "elink: phy_config_swapped {}, phy_index {:?}, actual_phy_idx {:?}",
            swapped,
            idx,
            actual
        );

        let mut phy = match populate_phy(host, params, idx) {
            Ok(phy) => phy,
            Err(e) => {
                log::debug!("elink: phy probe failed in phy index {:?}", idx);
                params.num_phys = 0;
                params.phy = [Phy::null(); MAX_PHYS];
                return Err(e);
            }
        };

        if !phy.is_present() {
            break;
        }

        sync_media_type(host, params, &phy, actual);
        phy_def_cfg(host, params, &mut phy, idx);

        *params.phy_mut(actual) = phy;
        params.num_phys += 1;
    }

    log::debug!("elink: end phy probe. #phys found {}", params.num_phys);
    Ok(params.num_phys)
}
