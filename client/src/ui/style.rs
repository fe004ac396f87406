use stylist::{css, Style};

pub fn container_style() -> Style {
    Style::new(css!(r#"
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 12px;
        left: 50%;
        min-width: 60%;
        padding-top: 2rem;
        position: absolute;
        transform: translate(-50%, 0);
        text-align: center;
    "#)).expect("Error creating style")
}

pub fn header_style() -> Style {
    Style::new(css!(r#"
        position: relative;
        display: block;
        font-size: 6vh;
        font-weight: bold;
        color: white;
        margin: 1.5vw 1.5vw 3vw;
        user-select: none;
    "#)).expect("Error creating style")
}

pub fn subheader_style() -> Style {
    Style::new(css!(r#"
        font-size: 3vh;
        color: #777;
        user-select: none;
    "#)).expect("Error creating style")
}

pub fn paragraph_style() -> Style {
    Style::new(css!(r#"
        margin: 1em 0;
        max-width: 40em;
    "#)).expect("Error creating style")
}

pub fn nav_row_style() -> Style {
    Style::new(css!(r#"
        display: flex;
        position: relative;
        gap: 1vw;
        flex-direction: row;
        justify-content: center;
        align-items: baseline;
    "#)).expect("Error creating style")
}

pub fn icon_style() -> Style {
    Style::new(css!(r#"
        position: relative;
        cursor: pointer;
    "#)).expect("Error creating style")
}

pub fn tooltip_style() -> Style {
    Style::new(css!(r#"
        visibility: hidden;
        opacity: 0;
        background: #222;
        color: #fff;
        text-align: center;
        border-radius: 6px;
        padding: 0.5em 1em;
        position: absolute;
        left: 50%;
        top: 110%;
        transform: translateX(-50%);
        transition: opacity 0.3s;
        pointer-events: none;
        white-space: nowrap;
        user-select: none;
    "#)).expect("Error creating style")
}

pub fn tooltip_visible_style() -> Style {
    Style::new(css!(r#"
        visibility: visible;
        opacity: 1;
        background: #222;
        color: #fff;
        text-align: center;
        border-radius: 6px;
        padding: 0.5em 1em;
        position: absolute;
        left: 50%;
        top: 110%;
        transform: translateX(-50%);
        transition: opacity 0.3s;
        pointer-events: none;
        white-space: nowrap;
        user-select: none;
    "#)).expect("Error creating style")
}

pub fn back_arrow_style() -> Style {
    Style::new(css!(r#"
        position: absolute;
        top: 0px;
        left: 0px;
        width: 2em;
        height: 2em;
        padding: 0.5em;
        opacity: 0.5;
        cursor: pointer;

        &:hover {
            opacity: 1.0;
        }
    "#)).expect("Error creating style")
}
