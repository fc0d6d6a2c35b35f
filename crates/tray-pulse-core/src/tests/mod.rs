mod icon;
